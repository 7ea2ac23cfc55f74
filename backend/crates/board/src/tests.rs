//! Unit tests for Board crate
//! Target: C0 coverage 100%, C1 coverage 80%

/// In-memory store used by the use case tests.
mod support {
    use std::sync::{Arc, Mutex};

    use chrono::Utc;

    use crate::domain::entities::Post;
    use crate::domain::repository::PostStore;
    use crate::error::BoardResult;

    #[derive(Default)]
    struct MemState {
        posts: Vec<Post>,
        next_id: i64,
    }

    #[derive(Clone, Default)]
    pub struct MemPostStore {
        inner: Arc<Mutex<MemState>>,
    }

    impl MemPostStore {
        pub fn post_count(&self) -> usize {
            self.inner.lock().unwrap().posts.len()
        }
    }

    impl PostStore for MemPostStore {
        async fn create(&self, title: &str) -> BoardResult<Post> {
            let mut state = self.inner.lock().unwrap();
            state.next_id += 1;
            let now = Utc::now();
            let post = Post {
                id: state.next_id,
                title: title.to_string(),
                created_at: now,
                updated_at: now,
            };
            state.posts.push(post.clone());

            Ok(post)
        }

        async fn find_by_id(&self, post_id: i64) -> BoardResult<Option<Post>> {
            let state = self.inner.lock().unwrap();
            Ok(state.posts.iter().find(|p| p.id == post_id).cloned())
        }

        async fn list(&self) -> BoardResult<Vec<Post>> {
            let state = self.inner.lock().unwrap();
            let mut posts = state.posts.clone();
            posts.sort_by_key(|p| p.id);

            Ok(posts)
        }

        async fn update_title(&self, post_id: i64, title: &str) -> BoardResult<Option<Post>> {
            let mut state = self.inner.lock().unwrap();

            Ok(state.posts.iter_mut().find(|p| p.id == post_id).map(|p| {
                p.title = title.to_string();
                p.updated_at = Utc::now();
                p.clone()
            }))
        }

        async fn delete(&self, post_id: i64) -> BoardResult<bool> {
            let mut state = self.inner.lock().unwrap();
            let before = state.posts.len();
            state.posts.retain(|p| p.id != post_id);

            Ok(state.posts.len() < before)
        }
    }
}

#[cfg(test)]
mod posts_tests {
    use std::sync::Arc;

    use super::support::MemPostStore;
    use crate::application::{
        CreatePostInput, CreatePostUseCase, DeletePostUseCase, ReadPostsUseCase, UpdatePostUseCase,
    };

    async fn create(store: &Arc<MemPostStore>, title: &str) -> crate::domain::entities::Post {
        CreatePostUseCase::new(store.clone())
            .execute(CreatePostInput {
                title: title.to_string(),
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let store = Arc::new(MemPostStore::default());

        let first = create(&store, "first").await;
        let second = create(&store, "second").await;

        assert!(second.id > first.id);
        assert_eq!(first.title, "first");
    }

    #[tokio::test]
    async fn test_empty_title_allowed() {
        let store = Arc::new(MemPostStore::default());

        let post = create(&store, "").await;

        assert_eq!(post.title, "");
        assert_eq!(store.post_count(), 1);
    }

    #[tokio::test]
    async fn test_list_empty_and_ordered() {
        let store = Arc::new(MemPostStore::default());
        let read = ReadPostsUseCase::new(store.clone());

        assert!(read.list().await.unwrap().is_empty());

        create(&store, "a").await;
        create(&store, "b").await;
        create(&store, "c").await;

        let titles: Vec<String> = read
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let store = Arc::new(MemPostStore::default());
        let read = ReadPostsUseCase::new(store.clone());

        assert_eq!(read.get(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_replaces_title() {
        let store = Arc::new(MemPostStore::default());
        let post = create(&store, "before").await;

        let updated = UpdatePostUseCase::new(store.clone())
            .execute(post.id, "after".to_string())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, post.id);
        assert_eq!(updated.title, "after");

        let read = ReadPostsUseCase::new(store.clone());
        assert_eq!(read.get(post.id).await.unwrap().unwrap().title, "after");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_none() {
        let store = Arc::new(MemPostStore::default());

        let updated = UpdatePostUseCase::new(store.clone())
            .execute(999, "title".to_string())
            .await
            .unwrap();

        assert_eq!(updated, None);
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let store = Arc::new(MemPostStore::default());
        let post = create(&store, "doomed").await;

        let use_case = DeletePostUseCase::new(store.clone());

        assert!(use_case.execute(post.id).await.unwrap());
        assert_eq!(store.post_count(), 0);

        // Second delete reports that nothing existed
        assert!(!use_case.execute(post.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_deleted_post_vanishes_from_list() {
        let store = Arc::new(MemPostStore::default());
        let keep = create(&store, "keep").await;
        let drop = create(&store, "drop").await;

        DeletePostUseCase::new(store.clone())
            .execute(drop.id)
            .await
            .unwrap();

        let read = ReadPostsUseCase::new(store.clone());
        let posts = read.list().await.unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, keep.id);
    }
}

#[cfg(test)]
mod dto_tests {
    use chrono::Utc;

    use crate::domain::entities::Post;
    use crate::presentation::dto::{CreatePostRequest, PostDto, UpdatePostRequest};

    #[test]
    fn test_post_dto_serialization() {
        let dto = PostDto::from(Post {
            id: 7,
            title: "hello".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        });

        let json = serde_json::to_string(&dto).unwrap();
        assert!(json.contains(r#""id":7"#));
        assert!(json.contains(r#""title":"hello""#));
        assert!(json.contains("createdAt"));
        assert!(json.contains("updatedAt"));
    }

    #[test]
    fn test_create_request_deserialization() {
        let request: CreatePostRequest =
            serde_json::from_str(r#"{"title":"new post"}"#).unwrap();
        assert_eq!(request.title, "new post");
    }

    #[test]
    fn test_update_request_deserialization() {
        let request: UpdatePostRequest = serde_json::from_str(r#"{"title":""}"#).unwrap();
        assert_eq!(request.title, "");
    }
}

#[cfg(test)]
mod error_tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use crate::error::BoardError;

    #[test]
    fn test_error_into_response_status_codes() {
        let response = BoardError::Internal("test".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_display() {
        assert!(
            BoardError::Internal("boom".into())
                .to_string()
                .contains("boom")
        );
    }
}
