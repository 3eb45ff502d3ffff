// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 数据集仓库集成测试
//!
//! 用wiremock模拟远程数据源，验证"读缓存失败 → 下载 → 重读一次"策略

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::helpers;
use charfind::domain::models::char_name::CharName;
use charfind::domain::repositories::char_name_repository::CharNameRepository;
use charfind::infrastructure::repositories::unicode_file_repo_impl::UnicodeFileRepositoryImpl;

/// 缓存命中时不访问网络
#[tokio::test]
async fn load_reads_the_cache_without_network() {
    let dir = tempfile::tempdir().unwrap();
    let cache_path = dir.path().join("UnicodeData.txt");
    std::fs::write(&cache_path, helpers::FIXTURE_DATA).unwrap();

    let settings = helpers::dataset_settings("http://127.0.0.1:9/UnicodeData.txt", &cache_path);
    let repo = UnicodeFileRepositoryImpl::new(&settings).unwrap();

    let got = repo.load().await.unwrap();

    assert_eq!(got.len(), 5);
    assert_eq!(got[0], CharName::new(0x3C, "LESS-THAN SIGN"));
}

/// 缓存未命中时下载一次并重读
#[tokio::test]
async fn load_downloads_once_on_cache_miss() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/UnicodeData.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(helpers::FIXTURE_DATA))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let cache_path = dir.path().join("UnicodeData.txt");
    let settings = helpers::dataset_settings(
        &format!("{}/UnicodeData.txt", server.uri()),
        &cache_path,
    );
    let repo = UnicodeFileRepositoryImpl::new(&settings).unwrap();

    let got = repo.load().await.unwrap();

    assert_eq!(got.len(), 5);
    assert!(cache_path.exists(), "download must populate the cache file");

    // 缓存已填充，再次加载不再访问网络（mock期望请求数为1）
    let again = repo.load().await.unwrap();
    assert_eq!(again, got);
}

/// 下载失败时错误上抛，不做第二次重试
#[tokio::test]
async fn load_fails_when_source_returns_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/UnicodeData.txt"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let settings = helpers::dataset_settings(
        &format!("{}/UnicodeData.txt", server.uri()),
        &dir.path().join("missing.txt"),
    );
    let repo = UnicodeFileRepositoryImpl::new(&settings).unwrap();

    let got = repo.load().await;

    assert!(got.is_err());
}

/// 畸形行被跳过，数据集其余部分仍可用
#[tokio::test]
async fn malformed_lines_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let cache_path = dir.path().join("UnicodeData.txt");
    std::fs::write(
        &cache_path,
        "0030;DIGIT ZERO;Nd;0;EN;;0;0;0;N;;;;;\n\
         garbage line without fields\n\
         0031;DIGIT ONE;Nd;0;EN;;1;1;1;N;;;;;\n",
    )
    .unwrap();

    let settings = helpers::dataset_settings("http://127.0.0.1:9/UnicodeData.txt", &cache_path);
    let repo = UnicodeFileRepositoryImpl::new(&settings).unwrap();

    let got = repo.load().await.unwrap();

    assert_eq!(
        got,
        vec![
            CharName::new(0x30, "DIGIT ZERO"),
            CharName::new(0x31, "DIGIT ONE"),
        ]
    );
}
