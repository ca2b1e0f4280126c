use serde::Serialize;

use crate::modules::catalog::infrastructure::models::AnimeInfo;

/// Single-record envelope
#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub success: bool,
    pub data: AnimeInfo,
    pub message: String,
}

impl DetailResponse {
    pub fn new(data: AnimeInfo, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }
}

/// Listing envelope used by every collection endpoint
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub count: usize,
    pub message: String,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
            message: message.into(),
        }
    }
}

/// Title-only ranking envelope
#[derive(Debug, Serialize)]
pub struct TitlesResponse {
    pub success: bool,
    pub titles: Vec<String>,
    pub count: usize,
    pub message: String,
}

impl TitlesResponse {
    pub fn new(titles: Vec<String>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            count: titles.len(),
            titles,
            message: message.into(),
        }
    }
}
