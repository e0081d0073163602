//! In-memory test doubles shared by unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::Mutex;
use shared::{
    Board, BoardPost, BoardPostPage, BoardPostReduced, BoardType, Comment, LoginRequest, LoginResponse, MemberInfo,
    PostSort, Profile, ProfileUpdateRequest, SortInfo, UniversityRequest,
};
use tokio::sync::Notify;

use crate::core::error::ApiError;
use crate::core::service::ApiService;

pub(crate) fn member(id: i64, nickname: &str) -> MemberInfo {
    MemberInfo {
        id,
        nickname: nickname.to_string(),
        university: None,
        university_email: None,
        profile_image: None,
    }
}

pub(crate) fn boards() -> Vec<Board> {
    vec![
        Board {
            id: 1,
            name: "Free".to_string(),
            board_type: BoardType::Post,
        },
        Board {
            id: 2,
            name: "Group Purchase".to_string(),
            board_type: BoardType::MarketPost,
        },
    ]
}

pub(crate) fn post_page(board_id: i64) -> BoardPostPage {
    let created = NaiveDate::from_ymd_opt(2024, 3, 1)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .unwrap();
    BoardPostPage {
        content: vec![BoardPostReduced {
            board_id,
            post_id: 10,
            title: "Hello".to_string(),
            text: "First post".to_string(),
            author_nickname: "abc".to_string(),
            created_date: created,
            modified_date: created,
            views: 3,
            likes: 1,
            comments_count: 0,
            image_urls: vec![],
        }],
        total_pages: 1,
        total_elements: 1,
        size: 20,
        number: 0,
        number_of_elements: 1,
        first: true,
        last: true,
        empty: false,
        sort: SortInfo::default(),
        pageable: None,
    }
}

pub(crate) fn board_post(post_id: i64) -> BoardPost {
    let created = NaiveDate::from_ymd_opt(2024, 3, 1)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .unwrap();
    BoardPost {
        board_id: 1,
        post_id,
        title: "Hello".to_string(),
        text: "First post".to_string(),
        author_nickname: "abc".to_string(),
        created_date: created,
        modified_date: created,
        views: 3,
        likes: 1,
        user_already_likes: false,
        comments: vec![Comment {
            comment_id: 1,
            author_nickname: "def".to_string(),
            text: "Welcome".to_string(),
            created_date: Some(created),
            replies: vec![],
        }],
        image_urls: vec![],
    }
}

/// Scripted `ApiService` that counts calls per operation.
pub(crate) struct MockApiService {
    calls: Mutex<HashMap<&'static str, usize>>,
    login: Mutex<Result<LoginResponse, ApiError>>,
    member_info: Mutex<Result<MemberInfo, ApiError>>,
    board_list: Mutex<Result<Vec<Board>, ApiError>>,
    profile: Mutex<Result<Profile, ApiError>>,
    profile_image: Mutex<Result<Vec<u8>, ApiError>>,
    update: Mutex<Result<(), ApiError>>,
    posts: Mutex<Result<BoardPostPage, ApiError>>,
    post: Mutex<Result<BoardPost, ApiError>>,
    last_login: Mutex<Option<LoginRequest>>,
    last_sort: Mutex<Option<PostSort>>,
    member_info_held: AtomicBool,
    member_info_gate: Notify,
}

impl MockApiService {
    pub(crate) fn new() -> Self {
        Self {
            calls: Mutex::new(HashMap::new()),
            login: Mutex::new(Ok(LoginResponse {
                access_token: "access".to_string(),
                refresh_token: Some("refresh".to_string()),
            })),
            member_info: Mutex::new(Ok(member(1, "abc"))),
            board_list: Mutex::new(Ok(boards())),
            profile: Mutex::new(Ok(Profile {
                name: "Kim".to_string(),
                gender: Some("F".to_string()),
                age: Some(21),
                description: None,
            })),
            profile_image: Mutex::new(Ok(vec![0x89, 0x50, 0x4E, 0x47])),
            update: Mutex::new(Ok(())),
            posts: Mutex::new(Ok(post_page(1))),
            post: Mutex::new(Ok(board_post(10))),
            last_login: Mutex::new(None),
            last_sort: Mutex::new(None),
            member_info_held: AtomicBool::new(false),
            member_info_gate: Notify::new(),
        }
    }

    fn record(&self, op: &'static str) {
        *self.calls.lock().entry(op).or_insert(0) += 1;
    }

    pub(crate) fn calls(&self, op: &str) -> usize {
        self.calls.lock().get(op).copied().unwrap_or(0)
    }

    pub(crate) fn total_calls(&self) -> usize {
        self.calls.lock().values().sum()
    }

    pub(crate) fn member_info_calls(&self) -> usize {
        self.calls("get_member_info")
    }

    pub(crate) fn board_list_calls(&self) -> usize {
        self.calls("get_board_list")
    }

    pub(crate) fn set_login(&self, result: Result<LoginResponse, ApiError>) {
        *self.login.lock() = result;
    }

    pub(crate) fn set_member_info(&self, result: Result<MemberInfo, ApiError>) {
        *self.member_info.lock() = result;
    }

    pub(crate) fn set_board_list(&self, result: Result<Vec<Board>, ApiError>) {
        *self.board_list.lock() = result;
    }

    pub(crate) fn set_profile_image(&self, result: Result<Vec<u8>, ApiError>) {
        *self.profile_image.lock() = result;
    }

    pub(crate) fn set_update(&self, result: Result<(), ApiError>) {
        *self.update.lock() = result;
    }

    pub(crate) fn set_posts(&self, result: Result<BoardPostPage, ApiError>) {
        *self.posts.lock() = result;
    }

    pub(crate) fn set_post(&self, result: Result<BoardPost, ApiError>) {
        *self.post.lock() = result;
    }

    pub(crate) fn last_login(&self) -> Option<LoginRequest> {
        self.last_login.lock().clone()
    }

    pub(crate) fn last_sort(&self) -> Option<PostSort> {
        *self.last_sort.lock()
    }

    /// Make `get_member_info` wait until [`Self::release_member_info`].
    pub(crate) fn hold_member_info(&self) {
        self.member_info_held.store(true, Ordering::SeqCst);
    }

    pub(crate) fn release_member_info(&self) {
        self.member_info_held.store(false, Ordering::SeqCst);
        self.member_info_gate.notify_waiters();
    }
}

#[async_trait]
impl ApiService for MockApiService {
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        self.record("login");
        *self.last_login.lock() = Some(request);
        self.login.lock().clone()
    }

    async fn get_member_info(&self) -> Result<MemberInfo, ApiError> {
        self.record("get_member_info");
        while self.member_info_held.load(Ordering::SeqCst) {
            let released = self.member_info_gate.notified();
            if !self.member_info_held.load(Ordering::SeqCst) {
                break;
            }
            released.await;
        }
        self.member_info.lock().clone()
    }

    async fn get_board_list(&self) -> Result<Vec<Board>, ApiError> {
        self.record("get_board_list");
        self.board_list.lock().clone()
    }

    async fn get_profile(&self) -> Result<Profile, ApiError> {
        self.record("get_profile");
        self.profile.lock().clone()
    }

    async fn get_profile_image(&self) -> Result<Vec<u8>, ApiError> {
        self.record("get_profile_image");
        self.profile_image.lock().clone()
    }

    async fn update_profile(&self, _request: ProfileUpdateRequest) -> Result<(), ApiError> {
        self.record("update_profile");
        self.update.lock().clone()
    }

    async fn update_university(&self, _request: UniversityRequest) -> Result<(), ApiError> {
        self.record("update_university");
        self.update.lock().clone()
    }

    async fn get_board_post_list(
        &self,
        _board_id: i64,
        _page: u32,
        _size: u32,
        sort: PostSort,
    ) -> Result<BoardPostPage, ApiError> {
        self.record("get_board_post_list");
        *self.last_sort.lock() = Some(sort);
        self.posts.lock().clone()
    }

    async fn get_board_post(&self, _post_id: i64) -> Result<BoardPost, ApiError> {
        self.record("get_board_post");
        self.post.lock().clone()
    }
}
