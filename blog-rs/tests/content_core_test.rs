use std::io::Write;
use std::str::FromStr;

use chrono::{TimeZone, Utc};

use blog_rs::config::Config;
use blog_rs::feed::{self, Author, Post, UserFeedInfo};
use blog_rs::spam::{SpamFilter, SpamSignal};

const CONFIG_TOML: &str = r#"
[filter]
banned_keywords = ["viagra"]
banned_alt_keywords = ["casino", "jackpot"]
max_trailing_links = 4
alt_keyword_threshold = 2

[feed]
base_url = "https://blog.example.com"
title = "devlog"
description = "A blog service for developers"
copyright = "Copyright (C) devlog. All rights reserved."
max_items = 20

[logging]
level = "info"
format = "pretty"
"#;

/// Helper to load the test configuration from a file on disk
fn load_config() -> Config {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{CONFIG_TOML}").unwrap();
    Config::from_file(file.path()).unwrap()
}

/// Helper to build a post
fn make_post(title: &str, slug: &str, username: &str, hour: u32) -> Post {
    Post {
        title: title.to_string(),
        body: format!("## {title}\n\ncontent"),
        url_slug: slug.to_string(),
        released_at: Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap(),
        author: Author {
            username: username.to_string(),
            display_name: username.to_string(),
        },
    }
}

/// Test post classification through file-loaded configuration
#[test]
fn test_post_verdicts_from_file_config() {
    let config = load_config();
    let filter = SpamFilter::new(config.filter);

    assert!(filter.is_spam("special offer on viagra today"));
    assert!(filter.is_spam("casino night, hit the jackpot"));
    assert!(!filter.is_spam("casino review, part one"));
    assert!(!filter.is_spam("오늘의 개발 일지"));
    assert!(!filter.is_spam(""));
}

/// Test the trailing-link-run verdict end to end
#[test]
fn test_link_run_verdict() {
    let config = load_config();
    let filter = SpamFilter::new(config.filter);

    let spam = "http://a\nhttp://b\nhttp://c\nhttp://d\nhttp://e";
    let check = filter.evaluate(spam);
    assert!(check.is_spam);
    assert_eq!(check.signal, Some(SpamSignal::TrailingLinks { count: 5 }));

    let ham = "http://a\nhttp://b\nhttp://c\nhttp://d";
    assert!(!filter.is_spam(ham));
}

/// Test comment verdicts
#[test]
fn test_comment_verdicts() {
    let config = load_config();
    let filter = SpamFilter::new(config.filter);

    assert!(filter.is_comment_spam("check this http://example.com"));
    assert!(!filter.is_comment_spam("안녕 http://example.com"));
    assert!(!filter.is_comment_spam("nice post"));
}

/// Test site and user feed rendering over the same post set
#[test]
fn test_feed_rendering() {
    let config = load_config();
    let posts = vec![
        make_post("hello world", "hello-world", "alice", 10),
        make_post("second post", "second-post", "alice", 12),
        make_post("unrelated", "unrelated", "bob", 11),
    ];

    let site = feed::render_site_feed(&posts, &config.feed).unwrap();
    let channel = rss::Channel::from_str(&site).unwrap();
    assert_eq!(channel.title(), "devlog");
    assert_eq!(channel.items().len(), 3);
    assert_eq!(channel.items()[0].title(), Some("second post"));
    assert_eq!(
        channel.items()[0].link(),
        Some("https://blog.example.com/@alice/second-post")
    );

    let user = UserFeedInfo {
        username: "alice".to_string(),
        title: None,
        short_bio: "alice's blog".to_string(),
        thumbnail: None,
    };
    let user_xml = feed::render_user_feed(&posts, &user, &config.feed).unwrap();
    let user_channel = rss::Channel::from_str(&user_xml).unwrap();
    assert_eq!(user_channel.title(), "alice.log");
    assert_eq!(user_channel.items().len(), 2);
}
