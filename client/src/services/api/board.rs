//! # Board Endpoints

use shared::{Board, BoardPost, BoardPostPage, PostSort};

use super::client::ApiClient;
use crate::core::error::ApiError;

/// `GET /board/list`
#[tracing::instrument(skip(client))]
pub async fn get_board_list(client: &ApiClient) -> Result<Vec<Board>, ApiError> {
    let request = client.authorize(client.client.get(client.api_url("/board/list"))).await?;
    let boards = ApiClient::read_json::<Vec<Board>>(ApiClient::send(request).await?).await?;
    tracing::debug!(count = boards.len(), "Fetched board list");
    Ok(boards)
}

/// `GET /board/post/{post_id}`
#[tracing::instrument(skip(client))]
pub async fn get_board_post(client: &ApiClient, post_id: i64) -> Result<BoardPost, ApiError> {
    let url = client.api_url(&format!("/board/post/{}", post_id));
    let request = client.authorize(client.client.get(url)).await?;
    let post = ApiClient::read_json::<BoardPost>(ApiClient::send(request).await?).await?;
    tracing::debug!(comments = post.comment_count(), "Fetched board post");
    Ok(post)
}

/// `GET /board/{board_id}?page=&size=&sort=&sort=`
#[tracing::instrument(skip(client, sort))]
pub async fn get_board_post_list(
    client: &ApiClient,
    board_id: i64,
    page: u32,
    size: u32,
    sort: PostSort,
) -> Result<BoardPostPage, ApiError> {
    let [primary, secondary] = sort.sort_params();
    let query = [
        ("page", page.to_string()),
        ("size", size.to_string()),
        ("sort", primary),
        ("sort", secondary),
    ];

    let request = client
        .authorize(
            client
                .client
                .get(client.api_url(&format!("/board/{}", board_id)))
                .query(&query),
        )
        .await?;
    ApiClient::read_json(ApiClient::send(request).await?).await
}
