use anyhow::Context;
use tracing::info;

use social_store::config::seed_path;
use social_store::dates::format_post_date;
use social_store::{demo_seed, load_seed, logging, SocialStore};

fn print_feed(store: &SocialStore) {
    for post in store.feed() {
        println!(
            "[{}] {} ({} likes, {} comments{})",
            format_post_date(post.created_at),
            post.user_name,
            post.likes_count,
            post.comments_count,
            if post.is_liked { ", liked" } else { "" },
        );
        println!("    {}", post.content);
        for comment in store.get_post_comments(&post.id) {
            println!("    > {}: {}", comment.user_name, comment.content);
        }
    }
}

fn main() -> anyhow::Result<()> {
    logging::init();

    let seed = match seed_path() {
        Some(path) => load_seed(&path).with_context(|| format!("Failed to load seed from {}", path))?,
        None => demo_seed(),
    };
    let mut store = SocialStore::new(seed);

    let viewer = store
        .current_user()
        .cloned()
        .context("Seed has no current user")?;
    info!(user_id = %viewer.id, "session started");

    let post = store.compose_post("Trying out the new store from the command line.", None)?;
    let post_id = post.id.clone();
    store.add_post(post);
    store.toggle_like(&post_id);

    let comment = store.compose_comment(&post_id, "Replying to myself.")?;
    store.add_comment(comment);

    if let Some(other) = store.users().iter().find(|u| u.id != viewer.id).map(|u| u.id.clone()) {
        store.toggle_follow(&other);
    }

    print_feed(&store);

    if let Some(me) = store.current_user() {
        println!(
            "\n{}: {} posts, {} followers, {} following",
            me.name, me.posts_count, me.followers_count, me.following_count
        );
    }

    Ok(())
}
