use async_graphql::{
    Context, EmptySubscription, ErrorExtensions, Object, Result as GqlResult, Schema,
};
use blog_posts::core::ports::{PostStore, PostStoreError};
use blog_posts::core::post::{Post, PostDraft, PostPatch};
use std::sync::Arc;

pub const DELETED_MESSAGE: &str = "successfully deleted the post";

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlPost {
    pub post_id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub publication_date: String,
    pub tags: Vec<String>,
}

impl From<Post> for GqlPost {
    fn from(post: Post) -> Self {
        Self {
            post_id: post.post_id,
            title: post.title,
            content: post.content,
            author: post.author,
            publication_date: post.publication_date,
            tags: post.tags,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
}

// Client-visible failure categories, keyed under extensions.code.
fn to_gql_error(error: PostStoreError) -> async_graphql::Error {
    let code = match &error {
        PostStoreError::Validation(_) => "INVALID_ARGUMENT",
        PostStoreError::NotFound(_) => "NOT_FOUND",
        PostStoreError::AlreadyExists => "ALREADY_EXISTS",
    };
    async_graphql::Error::new(error.to_string())
        .extend_with(|_, extensions| extensions.set("code", code))
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn post(&self, context: &Context<'_>, post_id: String) -> GqlResult<GqlPost> {
        let state = context.data_unchecked::<AppState>();
        let post = state.posts.read(&post_id).await.map_err(to_gql_error)?;
        Ok(post.into())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_post(
        &self,
        context: &Context<'_>,
        title: String,
        content: String,
        author: String,
        publication_date: String,
        tags: Option<Vec<String>>,
    ) -> GqlResult<GqlPost> {
        let state = context.data_unchecked::<AppState>();
        let draft = PostDraft {
            title,
            content,
            author,
            publication_date,
            tags: tags.unwrap_or_default(),
        };
        let post = state.posts.create(draft).await.map_err(to_gql_error)?;
        Ok(post.into())
    }

    async fn update_post(
        &self,
        context: &Context<'_>,
        post_id: String,
        title: Option<String>,
        content: Option<String>,
        author: Option<String>,
        tags: Option<Vec<String>>,
    ) -> GqlResult<GqlPost> {
        let state = context.data_unchecked::<AppState>();
        // Omitted arguments become the empty "not supplied" patch values.
        let patch = PostPatch {
            title: title.unwrap_or_default(),
            content: content.unwrap_or_default(),
            author: author.unwrap_or_default(),
            tags: tags.unwrap_or_default(),
        };
        let post = state
            .posts
            .update(&post_id, patch)
            .await
            .map_err(to_gql_error)?;
        Ok(post.into())
    }

    async fn delete_post(&self, context: &Context<'_>, post_id: String) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        state.posts.delete(&post_id).await.map_err(to_gql_error)?;
        Ok(DELETED_MESSAGE.to_string())
    }
}

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

#[cfg(test)]
mod blog_posts_schema_tests {
    use super::*;
    use blog_posts::adapters::in_memory::in_memory_post_store::InMemoryPostStore;

    fn make_schema() -> AppSchema {
        let state = AppState {
            posts: Arc::new(InMemoryPostStore::new()),
        };
        Schema::build(QueryRoot, MutationRoot, EmptySubscription)
            .data(state)
            .finish()
    }

    const CREATE_MUTATION: &str = r#"mutation {
        createPost(
            title: "Test Title",
            content: "Test Content",
            author: "Author1",
            publicationDate: "2025-06-26",
            tags: ["tag1", "tag2"]
        ) { postId title author publicationDate tags }
    }"#;

    async fn create_post_id(schema: &AppSchema) -> String {
        let response = schema.execute(CREATE_MUTATION).await;
        assert!(response.errors.is_empty(), "create failed: {:?}", response.errors);
        let data = response.data.into_json().unwrap();
        data["createPost"]["postId"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn it_should_create_and_read_a_post_through_the_schema() {
        let schema = make_schema();
        let post_id = create_post_id(&schema).await;

        let query = format!(r#"{{ post(postId: "{post_id}") {{ postId title tags }} }}"#);
        let response = schema.execute(&query).await;
        assert!(response.errors.is_empty(), "read failed: {:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert_eq!(data["post"]["postId"], post_id.as_str());
        assert_eq!(data["post"]["title"], "Test Title");
        assert_eq!(data["post"]["tags"], serde_json::json!(["tag1", "tag2"]));
    }

    #[tokio::test]
    async fn it_should_surface_validation_errors_with_an_invalid_argument_code() {
        let schema = make_schema();
        let mutation = r#"mutation {
            createPost(title: "", content: "Content", author: "Author1", publicationDate: "2025-06-26") { postId }
        }"#;
        let response = schema.execute(mutation).await;
        assert_eq!(response.errors.len(), 1);
        let error = serde_json::to_value(&response.errors[0]).unwrap();
        assert_eq!(error["message"], "title field is required");
        assert_eq!(error["extensions"]["code"], "INVALID_ARGUMENT");
    }

    #[tokio::test]
    async fn it_should_surface_conflicts_with_an_already_exists_code() {
        let schema = make_schema();
        create_post_id(&schema).await;

        let response = schema.execute(CREATE_MUTATION).await;
        assert_eq!(response.errors.len(), 1);
        let error = serde_json::to_value(&response.errors[0]).unwrap();
        assert_eq!(
            error["message"],
            "a post with the same title by this author already exists"
        );
        assert_eq!(error["extensions"]["code"], "ALREADY_EXISTS");
    }

    #[tokio::test]
    async fn it_should_report_not_found_for_an_unknown_post_id() {
        let schema = make_schema();
        let query = r#"{ post(postId: "non-existent-id") { postId } }"#;
        let response = schema.execute(query).await;
        assert_eq!(response.errors.len(), 1);
        let error = serde_json::to_value(&response.errors[0]).unwrap();
        assert_eq!(
            error["message"],
            "couldn't find post for the given post id non-existent-id"
        );
        assert_eq!(error["extensions"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn it_should_merge_updates_and_keep_the_publication_date() {
        let schema = make_schema();
        let post_id = create_post_id(&schema).await;

        let mutation = format!(
            r#"mutation {{
                updatePost(postId: "{post_id}", title: "New Title", tags: ["tagNew"]) {{
                    title content author publicationDate tags
                }}
            }}"#
        );
        let response = schema.execute(&mutation).await;
        assert!(response.errors.is_empty(), "update failed: {:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert_eq!(data["updatePost"]["title"], "New Title");
        assert_eq!(data["updatePost"]["content"], "Test Content");
        assert_eq!(data["updatePost"]["author"], "Author1");
        assert_eq!(data["updatePost"]["publicationDate"], "2025-06-26");
        assert_eq!(
            data["updatePost"]["tags"],
            serde_json::json!(["tagNew", "tag1", "tag2"])
        );
    }

    #[tokio::test]
    async fn it_should_delete_a_post_and_confirm() {
        let schema = make_schema();
        let post_id = create_post_id(&schema).await;

        let mutation = format!(r#"mutation {{ deletePost(postId: "{post_id}") }}"#);
        let response = schema.execute(&mutation).await;
        assert!(response.errors.is_empty(), "delete failed: {:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert_eq!(data["deletePost"], DELETED_MESSAGE);

        let query = format!(r#"{{ post(postId: "{post_id}") {{ postId }} }}"#);
        let response = schema.execute(&query).await;
        assert_eq!(response.errors.len(), 1);
        let error = serde_json::to_value(&response.errors[0]).unwrap();
        assert_eq!(error["extensions"]["code"], "NOT_FOUND");
    }
}
