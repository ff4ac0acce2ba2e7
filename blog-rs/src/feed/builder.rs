//! RSS 2.0 feed rendering
//!
//! Maps published posts into RSS channels: post bodies render from
//! markdown to HTML for item descriptions, titles and descriptions are
//! stripped of control characters that are not legal in XML, and item
//! links carry percent-encoded slugs.

use pulldown_cmark::{html, Parser};
use rss::{Channel, ChannelBuilder, GuidBuilder, ImageBuilder, Item, ItemBuilder};
use tracing::debug;
use url::Url;

use super::types::{FeedConfig, Post, UserFeedInfo};
use crate::error::{BlogError, Result};

/// Strip control characters that XML 1.0 cannot carry.
fn sanitize(unsanitized: &str) -> String {
    unsanitized
        .chars()
        .filter(|c| !matches!(c, '\u{1C}'..='\u{1F}' | '\u{08}'))
        .collect()
}

/// Render a markdown post body to HTML.
fn render_markdown(body: &str) -> String {
    let mut out = String::new();
    html::push_html(&mut out, Parser::new(body));
    out
}

/// Canonical post URL: `{base_url}/@{username}/{slug}`, percent-encoded.
fn post_link(base_url: &str, post: &Post) -> Result<String> {
    let raw = format!(
        "{}/@{}/{}",
        base_url.trim_end_matches('/'),
        post.author.username,
        post.url_slug
    );
    let url =
        Url::parse(&raw).map_err(|e| BlogError::Feed(format!("invalid post URL {raw}: {e}")))?;
    Ok(url.to_string())
}

fn convert(post: &Post, config: &FeedConfig) -> Result<Item> {
    let link = post_link(&config.base_url, post)?;

    let mut item = ItemBuilder::default();
    item.title(Some(sanitize(&post.title)))
        .link(Some(link.clone()))
        .description(Some(sanitize(&render_markdown(&post.body))))
        .guid(Some(
            GuidBuilder::default().value(link).permalink(true).build(),
        ))
        .pub_date(Some(post.released_at.to_rfc2822()))
        .author(Some(post.author.display_name.clone()));
    Ok(item.build())
}

/// Newest first, capped at the configured item count.
fn select<'a>(posts: &'a [Post], config: &FeedConfig) -> Vec<&'a Post> {
    let mut selected: Vec<&Post> = posts.iter().collect();
    selected.sort_by(|a, b| b.released_at.cmp(&a.released_at));
    selected.truncate(config.max_items);
    selected
}

fn build_channel(
    posts: &[&Post],
    config: &FeedConfig,
    title: String,
    description: String,
    image: Option<String>,
    copyright: String,
) -> Result<String> {
    let items = posts
        .iter()
        .map(|post| convert(post, config))
        .collect::<Result<Vec<_>>>()?;

    let mut builder = ChannelBuilder::default();
    builder
        .title(title.clone())
        .link(config.base_url.clone())
        .description(description)
        .copyright(Some(copyright))
        .last_build_date(posts.first().map(|p| p.released_at.to_rfc2822()))
        .items(items);

    if let Some(image_url) = image {
        builder.image(Some(
            ImageBuilder::default()
                .url(image_url)
                .title(title)
                .link(config.base_url.clone())
                .build(),
        ));
    }

    let channel = builder.build();
    debug!(items = channel.items().len(), "rendered feed channel");
    Ok(channel.to_string())
}

/// Render the site-wide RSS feed over every published post.
pub fn render_site_feed(posts: &[Post], config: &FeedConfig) -> Result<String> {
    let selected = select(posts, config);
    build_channel(
        &selected,
        config,
        config.title.clone(),
        config.description.clone(),
        config.image.clone(),
        config.copyright.clone(),
    )
}

/// Render a per-author RSS feed.
///
/// Only the author's posts are included. The channel title falls back
/// to `{username}.log` when the author configured none.
pub fn render_user_feed(posts: &[Post], user: &UserFeedInfo, config: &FeedConfig) -> Result<String> {
    // Usernames from v1 clients arrive with a leading '@'
    let username = user.username.strip_prefix('@').unwrap_or(&user.username);

    let own: Vec<Post> = posts
        .iter()
        .filter(|p| p.author.username == username)
        .cloned()
        .collect();
    let selected = select(&own, config);

    let title = user
        .title
        .clone()
        .unwrap_or_else(|| format!("{username}.log"));
    let copyright = format!("Copyright (C) {title}. All rights reserved.");

    build_channel(
        &selected,
        config,
        title,
        user.short_bio.clone(),
        user.thumbnail.clone(),
        copyright,
    )
}
