//! 냉장실 열부하 계산·장비 선정 엔진을 라이브러리로 분리하여 CLI 외의 화면에서도 재사용한다.

pub mod app;
pub mod config;
pub mod reference;
pub mod refrigeration;
pub mod ui_cli;
