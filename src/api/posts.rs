//! Content post endpoints.

use crate::models::{NewPost, Post, UpdatePost};

use super::{ApiResult, Gateway};

pub struct PostsApi {
    gateway: Gateway,
}

impl PostsApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn get_all(&self) -> ApiResult<Vec<Post>> {
        Ok(self.gateway.get("/posts").await?.result)
    }

    pub async fn get(&self, post_id: i64) -> ApiResult<Post> {
        let path = format!("/posts/{}", post_id);
        Ok(self.gateway.get(&path).await?.result)
    }

    pub async fn create(&self, new_post: &NewPost) -> ApiResult<Post> {
        Ok(self.gateway.post("/posts", new_post).await?.result)
    }

    pub async fn update(&self, post_id: i64, update: &UpdatePost) -> ApiResult<Post> {
        let path = format!("/posts/{}", post_id);
        Ok(self.gateway.put(&path, update).await?.result)
    }

    pub async fn delete(&self, post_id: i64) -> ApiResult<()> {
        let path = format!("/posts/{}", post_id);
        Ok(self.gateway.delete(&path).await?.result)
    }
}
