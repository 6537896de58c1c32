//! Generic REST verbs shared by every resource.
//!
//! Each verb is parameterized by a [`Resource`] and receives the
//! [`StarkClient`] to call with. Resource modules wrap these in typed
//! associated functions (`IssuingCard::create`, `PixRequest::query`, ...).
//!
//! | verb | request | response body |
//! |---|---|---|
//! | [`post_multi`] | `POST /{endpoint}` `{"<plural>": [..]}` | `{"<plural>": [..]}` |
//! | [`post_single`] | `POST /{endpoint}` `{..}` | `{"<singular>": {..}}` |
//! | [`get_id`] | `GET /{endpoint}/{id}` | `{"<singular>": {..}}` |
//! | [`get_page`] | `GET /{endpoint}` | `{"<plural>": [..], "cursor": ..}` |
//! | [`get_stream`] | repeated `GET /{endpoint}` | as `get_page` |
//! | [`patch_id`] | `PATCH /{endpoint}/{id}` | `{"<singular>": {..}}` |
//! | [`delete_id`] | `DELETE /{endpoint}/{id}` | `{"<singular>": {..}}` |
//! | [`get_content`] | `GET /{endpoint}/{id}/{sub}` | raw bytes |
//!
//! Parameters are validated before anything is sent: empty create batches,
//! blank ids and page limits outside `1..=100` are rejected with
//! [`ResourceError::InvalidParameter`].

use std::collections::HashMap;

use serde::Serialize;

use crate::clients::{HttpResponse, StarkClient};
use crate::rest::resource::serialize_to_query;
use crate::rest::response::parse_key;
use crate::rest::{GetParams, Page, Resource, ResourceError, ResourceStream};

/// Largest page the API serves.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Creates a batch of entities in one request.
///
/// The batch is accepted or rejected as a whole by the server.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidParameter`] for an empty batch, or the
/// mapped API error.
pub async fn post_multi<R: Resource>(
    client: &StarkClient,
    entities: &[R],
    params: Option<&GetParams>,
) -> Result<Vec<R>, ResourceError> {
    if entities.is_empty() {
        return Err(ResourceError::InvalidParameter {
            resource: R::NAME,
            message: "at least one entity must be provided for creation".to_string(),
        });
    }

    let key = R::plural_key();
    let mut body = serde_json::Map::new();
    body.insert(key.clone(), to_json::<R, _>(entities)?);

    let query = params
        .map(|p| serialize_to_query(p, R::NAME))
        .transpose()?;

    let response = client
        .post(&R::endpoint(), serde_json::Value::Object(body), query)
        .await?;
    ensure_success::<R>(&response, None)?;

    parse_key(&response, &key, R::NAME)
}

/// Creates a single entity, sent as the bare JSON object.
///
/// # Errors
///
/// Returns the mapped API error.
pub async fn post_single<R: Resource>(
    client: &StarkClient,
    entity: &R,
) -> Result<R, ResourceError> {
    let body = to_json::<R, _>(entity)?;

    let response = client.post(&R::endpoint(), body, None).await?;
    ensure_success::<R>(&response, None)?;

    parse_key(&response, &R::resource_key(), R::NAME)
}

/// Fetches one entity by id.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidParameter`] for a blank id,
/// [`ResourceError::NotFound`] if the entity does not exist, or another
/// mapped API error.
pub async fn get_id<R: Resource>(
    client: &StarkClient,
    id: &str,
    params: Option<&GetParams>,
) -> Result<R, ResourceError> {
    let id = validate_id::<R>(id)?;
    let query = params
        .map(|p| serialize_to_query(p, R::NAME))
        .transpose()?;

    let path = format!("{}/{}", R::endpoint(), urlencoding::encode(id));
    let response = client.get(&path, query).await?;
    ensure_success::<R>(&response, Some(id))?;

    parse_key(&response, &R::resource_key(), R::NAME)
}

/// Fetches one page of entities.
///
/// Without a cursor the first page is returned; passing the cursor of a
/// returned page fetches the page after it. The cursor is forwarded
/// verbatim.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidParameter`] if `limit` is outside
/// `1..=100`, or the mapped API error.
pub async fn get_page<R, P>(
    client: &StarkClient,
    params: &P,
    limit: Option<u32>,
    cursor: Option<&str>,
) -> Result<Page<R>, ResourceError>
where
    R: Resource,
    P: Serialize + ?Sized,
{
    if let Some(limit) = limit {
        if !(1..=MAX_PAGE_LIMIT).contains(&limit) {
            return Err(ResourceError::InvalidParameter {
                resource: R::NAME,
                message: format!("page limit must be between 1 and {MAX_PAGE_LIMIT}, got {limit}"),
            });
        }
    }

    let mut query = serialize_to_query(params, R::NAME)?;
    if let Some(limit) = limit {
        query.insert("limit".to_string(), limit.to_string());
    }
    if let Some(cursor) = cursor.filter(|c| !c.is_empty()) {
        query.insert("cursor".to_string(), cursor.to_string());
    }

    fetch_page(client, query).await
}

/// Starts a lazy listing of entities.
///
/// No request is sent until the returned stream is first advanced. At most
/// `limit` entities are yielded; `None` lists every matching entity.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidParameter`] if the params cannot be
/// serialized.
pub fn get_stream<'c, R, P>(
    client: &'c StarkClient,
    params: &P,
    limit: Option<u32>,
) -> Result<ResourceStream<'c, R>, ResourceError>
where
    R: Resource + 'c,
    P: Serialize + ?Sized,
{
    let mut query = serialize_to_query(params, R::NAME)?;
    query.remove("limit");
    query.remove("cursor");

    Ok(ResourceStream::new(client, query, limit))
}

/// Partially updates an entity. Only fields present in `payload` are sent.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidParameter`] for a blank id,
/// [`ResourceError::NotFound`] if the entity does not exist, or another
/// mapped API error.
pub async fn patch_id<R, P>(client: &StarkClient, id: &str, payload: &P) -> Result<R, ResourceError>
where
    R: Resource,
    P: Serialize + ?Sized,
{
    let id = validate_id::<R>(id)?;
    let body = to_json::<R, _>(payload)?;

    let path = format!("{}/{}", R::endpoint(), urlencoding::encode(id));
    let response = client.patch(&path, body, None).await?;
    ensure_success::<R>(&response, Some(id))?;

    parse_key(&response, &R::resource_key(), R::NAME)
}

/// Deletes or cancels an entity, returning its final state.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidParameter`] for a blank id,
/// [`ResourceError::NotFound`] if the entity does not exist, or another
/// mapped API error.
pub async fn delete_id<R: Resource>(client: &StarkClient, id: &str) -> Result<R, ResourceError> {
    let id = validate_id::<R>(id)?;

    let path = format!("{}/{}", R::endpoint(), urlencoding::encode(id));
    let response = client.delete(&path, None).await?;
    ensure_success::<R>(&response, Some(id))?;

    parse_key(&response, &R::resource_key(), R::NAME)
}

/// Downloads a binary sub-resource of an entity (e.g., its `pdf`).
///
/// # Errors
///
/// Returns [`ResourceError::InvalidParameter`] for a blank id,
/// [`ResourceError::NotFound`] if the entity does not exist, or another
/// mapped API error.
pub async fn get_content<R: Resource>(
    client: &StarkClient,
    id: &str,
    sub_resource: &str,
) -> Result<Vec<u8>, ResourceError> {
    let id = validate_id::<R>(id)?;

    let path = format!(
        "{}/{}/{}",
        R::endpoint(),
        urlencoding::encode(id),
        sub_resource
    );
    let response = client.get(&path, None).await?;
    ensure_success::<R>(&response, Some(id))?;

    Ok(response.raw_body)
}

/// Sends one list request with a fully built query and parses the page.
pub(crate) async fn fetch_page<R: Resource>(
    client: &StarkClient,
    query: HashMap<String, String>,
) -> Result<Page<R>, ResourceError> {
    let response = client.get(&R::endpoint(), Some(query)).await?;
    ensure_success::<R>(&response, None)?;

    let page = Page::from_http_response(&response, &R::plural_key(), R::NAME)?;
    tracing::debug!(
        resource = R::NAME,
        count = page.len(),
        has_cursor = page.has_next_page(),
        "Fetched page"
    );
    Ok(page)
}

fn validate_id<R: Resource>(id: &str) -> Result<&str, ResourceError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(ResourceError::InvalidParameter {
            resource: R::NAME,
            message: "id must not be empty".to_string(),
        });
    }
    Ok(trimmed)
}

fn ensure_success<R: Resource>(response: &HttpResponse, id: Option<&str>) -> Result<(), ResourceError> {
    if response.is_ok() {
        return Ok(());
    }
    Err(ResourceError::from_http_response(
        response.code,
        &response.body,
        R::NAME,
        id,
        response.request_id(),
    ))
}

fn to_json<R: Resource, T: Serialize + ?Sized>(value: &T) -> Result<serde_json::Value, ResourceError> {
    serde_json::to_value(value).map_err(|e| ResourceError::InvalidParameter {
        resource: R::NAME,
        message: format!("failed to serialize request body: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{Project, TEST_PRIVATE_KEY};
    use crate::config::Environment;
    use serde::Deserialize;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct MockHolder {
        #[serde(default, skip_serializing)]
        id: Option<String>,
        name: String,
    }

    impl Resource for MockHolder {
        const NAME: &'static str = "IssuingHolder";

        fn get_id(&self) -> Option<&str> {
            self.id.as_deref()
        }
    }

    fn create_test_client() -> StarkClient {
        let project = Project::new("1", Environment::Sandbox, TEST_PRIVATE_KEY).unwrap();
        StarkClient::new(project.into(), None)
    }

    #[tokio::test]
    async fn test_post_multi_rejects_empty_batch() {
        let client = create_test_client();
        let result = post_multi::<MockHolder>(&client, &[], None).await;
        assert!(matches!(
            result,
            Err(ResourceError::InvalidParameter { resource: "IssuingHolder", .. })
        ));
    }

    #[tokio::test]
    async fn test_by_id_verbs_reject_blank_id() {
        let client = create_test_client();

        let result = get_id::<MockHolder>(&client, "  ", None).await;
        assert!(matches!(result, Err(ResourceError::InvalidParameter { .. })));

        let result = delete_id::<MockHolder>(&client, "").await;
        assert!(matches!(result, Err(ResourceError::InvalidParameter { .. })));

        let result = get_content::<MockHolder>(&client, "", "pdf").await;
        assert!(matches!(result, Err(ResourceError::InvalidParameter { .. })));

        let result =
            patch_id::<MockHolder, _>(&client, "", &serde_json::json!({"name": "x"})).await;
        assert!(matches!(result, Err(ResourceError::InvalidParameter { .. })));
    }

    #[tokio::test]
    async fn test_get_page_rejects_out_of_range_limit() {
        let client = create_test_client();
        for limit in [0, 101] {
            let result =
                get_page::<MockHolder, _>(&client, &GetParams::default(), Some(limit), None).await;
            assert!(matches!(result, Err(ResourceError::InvalidParameter { .. })));
        }
    }

    #[test]
    fn test_get_stream_sends_nothing_until_advanced() {
        let client = create_test_client();
        let stream = get_stream::<MockHolder, _>(&client, &GetParams::default(), Some(5));
        assert!(stream.is_ok());
    }
}
