//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 정리 유틸리티
//! - [`display_terminal`] - 서버 기동 과정의 터미널 출력 함수들

pub mod string_utils;
pub mod display_terminal;
