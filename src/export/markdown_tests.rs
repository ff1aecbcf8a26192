//! Tests for the Markdown conversation renderer.

use rstest::rstest;

use super::*;
use crate::github::ResourceKind;
use crate::github::models::test_support::{author, comment, conversation, reactions, timestamp};

fn issue_with_comments(comments: Vec<Comment>) -> Conversation {
    let mut issue = conversation(ResourceKind::Issue, "Test Issue");
    issue.comments = comments;
    issue
}

#[rstest]
fn renders_full_document_layout() {
    let mut issue = issue_with_comments(vec![comment(
        1001,
        "alice",
        "2024-01-02T00:00:00Z",
        "First comment",
    )]);
    issue.comments.push(comment(1002, "bob", "2024-01-03T00:00:00Z", ""));

    let output = render(&issue, RenderOptions::default());

    let expected = concat!(
        "---\n",
        "title: \"Test Issue\"\n",
        "url: \"https://github.com/owner/repo/issues/1\"\n",
        "author: \"@testuser\"\n",
        "created_at: \"2024-01-01 00:00:00\"\n",
        "status: \"open\"\n",
        "---\n",
        "\n",
        "# Test Issue\n",
        "\n",
        "**Author**: @testuser\n",
        "**Created**: 2024-01-01 00:00:00\n",
        "**Status**: Open\n",
        "\n",
        "Issue body\n",
        "\n",
        "## Comments\n",
        "\n",
        "### @alice - 2024-01-02 00:00:00\n",
        "\n",
        "First comment\n",
        "\n",
        "### @bob - 2024-01-03 00:00:00\n",
        "\n",
    );
    assert_eq!(output, expected);
}

#[rstest]
fn empty_comment_list_omits_comments_heading() {
    let output = render(&issue_with_comments(Vec::new()), RenderOptions::default());

    assert!(!output.contains("## Comments"), "unexpected heading in {output}");
    assert!(output.ends_with("Issue body\n\n"));
}

#[rstest]
fn empty_body_is_skipped() {
    let mut issue = issue_with_comments(Vec::new());
    issue.body.clear();

    let output = render(&issue, RenderOptions::default());

    assert!(output.ends_with("**Status**: Open\n\n"), "got {output}");
}

#[rstest]
fn deleted_comment_renders_marker_without_body() {
    let mut deleted = comment(2, "deleted", "2024-01-03T00:00:00Z", "secret text");
    deleted.deleted = true;
    let issue = issue_with_comments(vec![
        comment(1, "user1", "2024-01-02T00:00:00Z", "Normal comment"),
        deleted,
        comment(3, "user2", "2024-01-04T00:00:00Z", "Another comment"),
    ]);

    let output = render(&issue, RenderOptions::default());

    assert!(output.contains("### @deleted - 2024-01-03 00:00:00\n\n~~deleted~~\n\n"));
    assert!(!output.contains("secret text"));
    assert!(output.contains("Normal comment"));
    assert!(output.contains("Another comment"));
}

#[rstest]
fn user_links_apply_to_metadata_and_comment_headings() {
    let issue = issue_with_comments(vec![comment(
        1,
        "user1",
        "2024-01-02T00:00:00Z",
        "Comment",
    )]);

    let output = render(&issue, RenderOptions::default().with_author_links(true));

    assert!(output.contains("**Author**: [@testuser](https://github.com/testuser)\n"));
    assert!(output.contains("### [@user1](https://github.com/user1) - "));
    assert!(
        output.contains("author: \"@testuser\"\n"),
        "front matter never links"
    );
}

#[rstest]
fn reactions_follow_comment_body_in_fixed_order() {
    let mut reacted = comment(1, "user1", "2024-01-02T00:00:00Z", "Comment");
    reacted.reactions = reactions(&[
        (ReactionKind::Laugh, 2),
        (ReactionKind::ThumbsUp, 3),
        (ReactionKind::Heart, 1),
    ]);
    let issue = issue_with_comments(vec![reacted]);

    let output = render(&issue, RenderOptions::default().with_reactions(true));

    assert!(output.ends_with("Comment\n\n👍 3 ❤️ 1 😄 2\n\n"), "got {output}");
}

#[rstest]
fn reactions_are_hidden_when_disabled() {
    let mut reacted = comment(1, "user1", "2024-01-02T00:00:00Z", "Comment");
    reacted.reactions = reactions(&[(ReactionKind::ThumbsUp, 3)]);

    let output = render(&issue_with_comments(vec![reacted]), RenderOptions::default());

    assert!(!output.contains("👍"));
}

#[rstest]
fn merged_status_is_capitalised_in_metadata_only() {
    let mut pull_request = conversation(ResourceKind::PullRequest, "Test PR");
    pull_request.status = "merged".to_owned();

    let output = render(&pull_request, RenderOptions::default());

    assert!(output.contains("status: \"merged\"\n"));
    assert!(output.contains("**Status**: Merged\n"));
}

#[rstest]
fn shortcodes_are_replaced_in_bodies_but_not_titles() {
    let mut issue = issue_with_comments(vec![comment(
        1,
        "user1",
        "2024-01-02T00:00:00Z",
        "Nice :rocket:",
    )]);
    issue.title = "Emoji :tada:".to_owned();
    issue.body = "This has :thumbsup: and :heart:".to_owned();

    let output = render(&issue, RenderOptions::default());

    assert!(output.contains("This has 👍 and ❤️\n\n"));
    assert!(output.contains("Nice 🚀\n\n"));
    assert!(output.contains("# Emoji :tada:\n"));
}

#[rstest]
fn timestamps_keep_the_captured_offset() {
    assert_eq!(
        format_timestamp(&timestamp("2025-01-04T14:30:45+08:00")),
        "2025-01-04 14:30:45"
    );
}

#[rstest]
#[case::plain(false, "https://github.com/alice", "@alice")]
#[case::linked(true, "https://github.com/alice", "[@alice](https://github.com/alice)")]
#[case::linked_without_profile(true, "", "@alice")]
fn formats_authors(#[case] link: bool, #[case] profile: &str, #[case] expected: &str) {
    assert_eq!(format_author(&Author::new("alice", profile), link), expected);
}

#[rstest]
#[case("open", "Open")]
#[case("closed", "Closed")]
#[case("merged", "Merged")]
#[case("", "")]
#[case("already Cased", "Already Cased")]
fn capitalises_first_letter_only(#[case] status: &str, #[case] expected: &str) {
    assert_eq!(capitalize_status(status), expected);
}

#[rstest]
#[case::only_narrowed_kinds(
    &[(ReactionKind::Eyes, 4), (ReactionKind::Rocket, 1), (ReactionKind::ThumbsDown, 2)],
    ""
)]
#[case::mixed(
    &[(ReactionKind::Hooray, 1), (ReactionKind::Confused, 5), (ReactionKind::ThumbsUp, 2)],
    "👍 2 🎉 1"
)]
#[case::zero_counts_skipped(&[(ReactionKind::Heart, 0), (ReactionKind::Laugh, 1)], "😄 1")]
fn summarises_reactions(#[case] counts: &[(ReactionKind, u64)], #[case] expected: &str) {
    assert_eq!(format_reactions(&reactions(counts)), expected);
}

#[rstest]
fn ghost_author_renders_with_login() {
    let mut issue = issue_with_comments(Vec::new());
    issue.author = author("ghost");

    let output = render(&issue, RenderOptions::default());

    assert!(output.contains("author: \"@ghost\"\n"));
}
