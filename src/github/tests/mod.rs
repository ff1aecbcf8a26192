//! Unit tests for URL resolution and conversation intake.

use mockall::predicate::always;
use rstest::rstest;

use super::models::test_support::{comment, conversation};
use super::{
    ConversationIntake, ConvertError, MockConversationGateway, PersonalAccessToken,
    ResourceDescriptor, ResourceKind,
};

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime should build")
        .block_on(future)
}

#[rstest]
#[case::issue(
    "https://github.com/owner/repo/issues/123",
    ResourceKind::Issue,
    123,
    "https://github.com/owner/repo/issues/123"
)]
#[case::pull_request(
    "https://github.com/owner/repo/pull/456",
    ResourceKind::PullRequest,
    456,
    "https://github.com/owner/repo/pull/456"
)]
#[case::discussion(
    "https://github.com/owner/repo/discussions/789",
    ResourceKind::Discussion,
    789,
    "https://github.com/owner/repo/discussions/789"
)]
#[case::query_and_fragment(
    "https://github.com/owner/repo/issues/123?q=1#top",
    ResourceKind::Issue,
    123,
    "https://github.com/owner/repo/issues/123"
)]
#[case::trailing_segments(
    "https://github.com/owner/repo/pull/12/files",
    ResourceKind::PullRequest,
    12,
    "https://github.com/owner/repo/pull/12"
)]
#[case::trailing_slash(
    "https://github.com/owner/repo/issues/5/",
    ResourceKind::Issue,
    5,
    "https://github.com/owner/repo/issues/5"
)]
#[case::preserves_case(
    "https://github.com/Owner/Repo/ISSUES/999",
    ResourceKind::Issue,
    999,
    "https://github.com/Owner/Repo/ISSUES/999"
)]
#[case::zero_number(
    "https://github.com/owner/repo/issues/0",
    ResourceKind::Issue,
    0,
    "https://github.com/owner/repo/issues/0"
)]
#[case::plain_http(
    "http://github.com/owner/repo/issues/7",
    ResourceKind::Issue,
    7,
    "https://github.com/owner/repo/issues/7"
)]
#[case::dot_segments_after_number_are_ignored(
    "https://github.com/owner/repo/issues/1/../../pull/2",
    ResourceKind::Issue,
    1,
    "https://github.com/owner/repo/issues/1"
)]
fn resolves_supported_urls(
    #[case] input: &str,
    #[case] kind: ResourceKind,
    #[case] number: u64,
    #[case] canonical: &str,
) {
    let descriptor = ResourceDescriptor::resolve(input).expect("URL should resolve");

    assert_eq!(descriptor.kind(), kind, "kind mismatch");
    assert_eq!(descriptor.number().get(), number, "number mismatch");
    assert_eq!(descriptor.canonical_url(), canonical, "canonical URL mismatch");
}

#[rstest]
fn resolved_descriptor_exposes_repository_identity() {
    let descriptor = ResourceDescriptor::resolve("https://github.com/Owner/Repo/issues/1")
        .expect("URL should resolve");

    assert_eq!(descriptor.owner().as_str(), "Owner");
    assert_eq!(descriptor.repository().as_str(), "Repo");
}

#[rstest]
#[case::empty("")]
#[case::not_a_url("not a url")]
#[case::other_host("https://gitlab.com/owner/repo/issues/1")]
#[case::subdomain("https://api.github.com/owner/repo/issues/1")]
#[case::uppercase_host("https://GitHub.com/owner/repo/issues/1")]
#[case::explicit_port("https://github.com:443/owner/repo/issues/1")]
#[case::no_path("https://github.com")]
#[case::root_path("https://github.com/")]
#[case::single_segment("https://github.com/owner")]
#[case::reserved_first_segment("https://github.com/issues/123")]
#[case::reserved_pull("https://github.com/pull/1")]
#[case::type_without_number("https://github.com/owner/repo/issues")]
#[case::non_numeric_number("https://github.com/owner/repo/issues/abc")]
#[case::negative_number("https://github.com/owner/repo/issues/-1")]
#[case::empty_owner("https://github.com//repo/issues/1")]
#[case::leading_space(" https://github.com/owner/repo/issues/1")]
#[case::trailing_newline("https://github.com/owner/repo/issues/1\n")]
#[case::embedded_tab("https://github.com/owner/repo/issues/\t1")]
#[case::dot_segment_in_place_of_number("https://github.com/owner/repo/issues/../1")]
fn rejects_malformed_urls_as_format_errors(#[case] input: &str) {
    let result = ResourceDescriptor::resolve(input);

    assert!(
        matches!(result, Err(ConvertError::InvalidUrlFormat { .. })),
        "expected InvalidUrlFormat for {input:?}, got {result:?}"
    );
}

#[rstest]
#[case::repository_home("https://github.com/owner/repo")]
#[case::repository_home_slash("https://github.com/owner/repo/")]
#[case::wiki("https://github.com/owner/repo/wiki")]
#[case::actions("https://github.com/owner/repo/actions")]
#[case::security("https://github.com/owner/repo/security")]
#[case::pulse("https://github.com/owner/repo/pulse")]
#[case::wiki_page("https://github.com/owner/repo/wiki/Home")]
#[case::commits("https://github.com/owner/repo/commits/123")]
#[case::releases("https://github.com/owner/repo/releases/1")]
#[case::blob_checks_type_before_number("https://github.com/owner/repo/blob/main/README.md")]
fn rejects_unconvertible_github_pages_as_unsupported(#[case] input: &str) {
    let result = ResourceDescriptor::resolve(input);

    assert!(
        matches!(result, Err(ConvertError::UnsupportedResource { .. })),
        "expected UnsupportedResource for {input:?}, got {result:?}"
    );
}

#[rstest]
#[case::format(ConvertError::format("bad"), true)]
#[case::unsupported(ConvertError::unsupported("wiki"), true)]
#[case::not_found(ConvertError::NotFound { resource: "issue".to_owned() }, false)]
#[case::missing(ConvertError::MissingUrl, false)]
fn url_errors_are_grouped(#[case] error: ConvertError, #[case] expected: bool) {
    assert_eq!(error.is_url_error(), expected);
}

#[rstest]
#[case::blank("   ", None)]
#[case::empty("", None)]
#[case::trimmed("  ghp_abc \n", Some("ghp_abc"))]
fn personal_access_token_trims_and_rejects_blank(
    #[case] raw: &str,
    #[case] expected: Option<&str>,
) {
    let token = PersonalAccessToken::new(raw);
    assert_eq!(token.as_ref().map(PersonalAccessToken::value), expected);
}

#[rstest]
fn personal_access_token_debug_is_redacted() {
    let token = PersonalAccessToken::new("ghp_secret").expect("token should be present");
    assert!(!format!("{token:?}").contains("ghp_secret"));
}

fn resolve(url: &str) -> ResourceDescriptor {
    ResourceDescriptor::resolve(url).expect("URL should resolve")
}

#[rstest]
fn issue_intake_attaches_comments_in_chronological_order() {
    let mut gateway = MockConversationGateway::new();
    gateway
        .expect_issue()
        .with(always())
        .times(1)
        .returning(|_| Ok(conversation(ResourceKind::Issue, "Test Issue")));
    gateway
        .expect_issue_comments()
        .with(always())
        .times(1)
        .returning(|_| {
            Ok(vec![
                comment(3, "carol", "2024-01-04T00:00:00Z", "third"),
                comment(1, "alice", "2024-01-02T00:00:00Z", "first"),
                comment(2, "bob", "2024-01-03T00:00:00Z", "second"),
            ])
        });

    let intake = ConversationIntake::new(&gateway);
    let loaded = block_on(intake.load(&resolve("https://github.com/owner/repo/issues/1")))
        .expect("intake should succeed");

    let ids: Vec<u64> = loaded.comments.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[rstest]
fn equal_timestamps_keep_upstream_order() {
    let mut gateway = MockConversationGateway::new();
    gateway
        .expect_issue()
        .returning(|_| Ok(conversation(ResourceKind::Issue, "Test Issue")));
    gateway.expect_issue_comments().returning(|_| {
        Ok(vec![
            comment(9, "zed", "2024-01-02T00:00:00Z", "a"),
            comment(4, "amy", "2024-01-02T00:00:00Z", "b"),
        ])
    });

    let intake = ConversationIntake::new(&gateway);
    let loaded = block_on(intake.load(&resolve("https://github.com/owner/repo/issues/1")))
        .expect("intake should succeed");

    let ids: Vec<u64> = loaded.comments.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![9, 4]);
}

#[rstest]
#[case::issue("https://github.com/owner/repo/issues/1")]
#[case::pull_request("https://github.com/owner/repo/pull/1")]
fn comment_failures_degrade_to_empty_list(#[case] url: &str) {
    let mut gateway = MockConversationGateway::new();
    gateway
        .expect_issue()
        .returning(|_| Ok(conversation(ResourceKind::Issue, "Test Issue")));
    gateway.expect_issue_comments().returning(|_| {
        Err(ConvertError::Network {
            message: "connection reset".to_owned(),
        })
    });
    gateway
        .expect_pull_request()
        .returning(|_| Ok(conversation(ResourceKind::PullRequest, "Test PR")));
    gateway.expect_pull_request_comments().returning(|_| {
        Err(ConvertError::UnexpectedStatus {
            status: 500,
            message: "boom".to_owned(),
        })
    });

    let intake = ConversationIntake::new(&gateway);
    let loaded = block_on(intake.load(&resolve(url))).expect("intake should succeed");

    assert!(loaded.comments.is_empty());
}

#[rstest]
fn root_failure_propagates_without_fetching_comments() {
    let mut gateway = MockConversationGateway::new();
    gateway.expect_issue().times(1).returning(|_| {
        Err(ConvertError::NotFound {
            resource: "issue".to_owned(),
        })
    });
    gateway.expect_issue_comments().times(0);

    let intake = ConversationIntake::new(&gateway);
    let result = block_on(intake.load(&resolve("https://github.com/owner/repo/issues/404")));

    assert!(
        matches!(result, Err(ref error) if error.is_not_found()),
        "expected NotFound, got {result:?}"
    );
}

#[rstest]
fn discussion_uses_single_combined_fetch() {
    let mut gateway = MockConversationGateway::new();
    gateway.expect_discussion().times(1).returning(|_| {
        let mut discussion = conversation(ResourceKind::Discussion, "Test Discussion");
        discussion.comments = vec![
            comment(2, "bob", "2025-01-05T00:00:00Z", "later"),
            comment(1, "alice", "2025-01-04T00:00:00Z", "earlier"),
        ];
        Ok(discussion)
    });

    let intake = ConversationIntake::new(&gateway);
    let loaded = block_on(intake.load(&resolve(
        "https://github.com/owner/repo/discussions/3",
    )))
    .expect("intake should succeed");

    assert_eq!(loaded.kind, ResourceKind::Discussion);
    let ids: Vec<u64> = loaded.comments.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1, 2]);
}
