use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Kind of board: free-form posts or group-purchase market posts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BoardType {
    #[serde(rename = "post", alias = "Post")]
    Post,
    #[serde(rename = "marketPost")]
    MarketPost,
}

/// Board entry from `GET /board/list`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Board {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub board_type: BoardType,
}

/// Condensed post shown in board post lists
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoardPostReduced {
    pub board_id: i64,
    pub post_id: i64,
    pub title: String,
    pub text: String,
    pub author_nickname: String,
    pub created_date: NaiveDateTime,
    pub modified_date: NaiveDateTime,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments_count: u64,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

/// Comment on a post, with one level of replies
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub comment_id: i64,
    #[serde(default)]
    pub author_nickname: String,
    pub text: String,
    #[serde(default)]
    pub created_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub replies: Vec<Comment>,
}

/// Full post from `GET /board/post/{post_id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoardPost {
    pub board_id: i64,
    pub post_id: i64,
    pub title: String,
    pub text: String,
    pub author_nickname: String,
    pub created_date: NaiveDateTime,
    pub modified_date: NaiveDateTime,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub user_already_likes: bool,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

impl BoardPost {
    /// Top-level comments plus their replies
    pub fn comment_count(&self) -> usize {
        self.comments.iter().map(|c| 1 + c.replies.len()).sum()
    }
}

/// Sort flags reported by the backend pager
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortInfo {
    pub empty: bool,
    pub sorted: bool,
    pub unsorted: bool,
}

/// Page request echoed back by the backend pager
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pageable {
    pub page_number: u32,
    pub page_size: u32,
    #[serde(default)]
    pub sort: SortInfo,
    pub offset: u64,
    pub paged: bool,
    pub unpaged: bool,
}

/// One page of board posts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoardPostPage {
    pub content: Vec<BoardPostReduced>,
    pub total_pages: u32,
    pub total_elements: u64,
    pub size: u32,
    pub number: u32,
    pub number_of_elements: u32,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
    #[serde(default)]
    pub sort: SortInfo,
    #[serde(default)]
    pub pageable: Option<Pageable>,
}

/// Primary sort key for board post lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Title,
    #[default]
    CreatedDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Sort order for board post lists.
///
/// The backend accepts several `sort` query params applied in order. The
/// secondary key is always the other field, in the same direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PostSort {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl PostSort {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// `sort` query values, primary key first.
    pub fn sort_params(&self) -> [String; 2] {
        let dir = self.direction.as_str();
        match self.key {
            SortKey::Title => [format!("title,{dir}"), format!("createdDate,{dir}")],
            SortKey::CreatedDate => [format!("createdDate,{dir}"), format!("title,{dir}")],
        }
    }
}
