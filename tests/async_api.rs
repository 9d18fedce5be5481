#![cfg(feature = "async")]
//! Async-only tests: the Tokio wrappers must mirror the sync pipeline.

use chunked_io::manager::r#async::{
    fast_load_lines_async, parallel_read_async, put_contents_async, read_contents_async,
};
use chunked_io::{ChunkedIoError, WriteMode};
use std::fs;
use std::path::PathBuf;

fn tmp_path(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!(
        "chunked_io_async_test_{}_{}",
        name,
        std::process::id()
    ));
    p
}

#[tokio::test(flavor = "multi_thread")]
async fn async_put_then_load_lines() {
    let path = tmp_path("async_put_then_load_lines");
    let _ = fs::remove_file(&path);

    put_contents_async(&path, "one\ntwo\n\nthree\n".to_string(), WriteMode::Overwrite, false)
        .await
        .expect("put_contents_async");

    let lines = fast_load_lines_async(&path, false, false)
        .await
        .expect("fast_load_lines_async");
    assert_eq!(lines, vec!["one", "two", "three"]);

    let _ = fs::remove_file(&path);
}

#[tokio::test(flavor = "multi_thread")]
async fn async_parallel_read_matches_fs_read() {
    let path = tmp_path("async_parallel_read_matches_fs_read");
    let data: Vec<u8> = (0..9001u32).map(|i| (i % 256) as u8).collect();
    fs::write(&path, &data).expect("seed");

    let assembled = parallel_read_async(&path).await.expect("parallel_read_async");
    assert_eq!(assembled, data);

    let _ = fs::remove_file(&path);
}

#[tokio::test(flavor = "multi_thread")]
async fn async_read_contents_and_sentinels() {
    let path = tmp_path("async_read_contents_and_sentinels");
    let _ = fs::remove_file(&path);

    let err = read_contents_async(&path).await.unwrap_err();
    assert!(matches!(err, ChunkedIoError::FileNotFound(_)));

    put_contents_async(&path, "payload".to_string(), WriteMode::Append, false)
        .await
        .expect("append");
    assert_eq!(
        read_contents_async(&path).await.expect("read_contents_async"),
        "payload"
    );

    let _ = fs::remove_file(&path);
}

#[tokio::test(flavor = "multi_thread")]
async fn async_empty_file_sentinel() {
    let path = tmp_path("async_empty_file_sentinel");
    fs::write(&path, b"").expect("seed empty");

    let err = fast_load_lines_async(&path, true, true).await.unwrap_err();
    assert!(matches!(err, ChunkedIoError::FileEmpty));

    let _ = fs::remove_file(&path);
}
