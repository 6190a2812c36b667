//! Service-layer tests over in-memory storage fakes.
//!
//! Every repository port is backed by one shared `InMemoryStore`, so these
//! tests exercise the full toggle, ranking, review, and notification logic
//! without Postgres or Redis.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use blog_cache::MemoryCooldownStore;
use blog_common::auth::JwtService;
use blog_core::entities::{
    Comment, CommentVote, Notification, Post, Reaction, ReactionKind, Review, ScoredComment,
    Subscription, ToggleAction, User, VoteValue,
};
use blog_core::traits::{
    CommentRepository, NotificationRepository, PostRepository, ReactionRepository, RepoResult,
    ReviewRepository, SubscriptionRepository, UserRepository, VoteCounts, VoteRepository,
};
use blog_core::{DomainError, Snowflake, SnowflakeGenerator};
use blog_service::dto::{AddCommentRequest, AddReviewRequest};
use blog_service::{
    CommentService, EngagementService, NotificationService, ReactionService, ReviewService,
    ServiceContext, ServiceContextBuilder, ServiceError, SubscriptionService, VoteService,
};

// ============================================================================
// In-memory store backing every repository port
// ============================================================================

#[derive(Default)]
struct InMemoryStore {
    posts: Mutex<HashMap<Snowflake, Post>>,
    users: Mutex<HashMap<Snowflake, User>>,
    comments: Mutex<HashMap<Snowflake, Comment>>,
    reactions: Mutex<HashMap<(Snowflake, Snowflake), Reaction>>,
    votes: Mutex<HashMap<(Snowflake, Snowflake), CommentVote>>,
    reviews: Mutex<HashMap<(Snowflake, Snowflake), Review>>,
    notifications: Mutex<Vec<Notification>>,
    subscriptions: Mutex<HashSet<(Snowflake, Snowflake)>>,
}

impl InMemoryStore {
    fn seed_post(&self, id: i64, author_id: i64) -> Snowflake {
        let mut post = Post::new(
            Snowflake::new(id),
            Snowflake::new(author_id),
            format!("Post {id}"),
            format!("post-{id}"),
        );
        post.publish();
        let post_id = post.id;
        self.posts.lock().unwrap().insert(post_id, post);
        post_id
    }

    fn seed_draft_post(&self, id: i64, author_id: i64) -> Snowflake {
        let post = Post::new(
            Snowflake::new(id),
            Snowflake::new(author_id),
            format!("Draft {id}"),
            format!("draft-{id}"),
        );
        let post_id = post.id;
        self.posts.lock().unwrap().insert(post_id, post);
        post_id
    }

    fn seed_user(&self, id: i64, username: &str, is_staff: bool) -> Snowflake {
        let user = User {
            id: Snowflake::new(id),
            username: username.to_string(),
            email: format!("{username}@example.com"),
            is_staff,
            created_at: Utc::now(),
        };
        let user_id = user.id;
        self.users.lock().unwrap().insert(user_id, user);
        user_id
    }

    /// Insert an already-approved comment with a controlled timestamp
    fn seed_comment(&self, id: i64, post_id: Snowflake, author_id: Snowflake, minute: u32) {
        let mut comment = Comment::new(
            Snowflake::new(id),
            post_id,
            author_id,
            format!("comment {id}"),
        );
        comment.is_approved = true;
        comment.created_at = Utc.with_ymd_and_hms(2025, 6, 1, 12, minute, 0).unwrap();
        self.comments.lock().unwrap().insert(comment.id, comment);
    }

    fn notifications_for(&self, recipient_id: Snowflake) -> Vec<Notification> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.recipient_id == recipient_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        Ok(self.posts.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Post>> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .values()
            .find(|p| p.slug == slug)
            .cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.username == username)
            .cloned())
    }
}

#[async_trait]
impl ReactionRepository for InMemoryStore {
    async fn find(&self, post_id: Snowflake, user_id: Snowflake) -> RepoResult<Option<Reaction>> {
        Ok(self
            .reactions
            .lock()
            .unwrap()
            .get(&(post_id, user_id))
            .cloned())
    }

    async fn try_create(&self, reaction: &Reaction) -> RepoResult<bool> {
        let mut reactions = self.reactions.lock().unwrap();
        let key = (reaction.post_id, reaction.user_id);
        if reactions.contains_key(&key) {
            return Ok(false);
        }
        reactions.insert(key, reaction.clone());
        Ok(true)
    }

    async fn update_kind(
        &self,
        post_id: Snowflake,
        user_id: Snowflake,
        kind: ReactionKind,
    ) -> RepoResult<()> {
        if let Some(reaction) = self.reactions.lock().unwrap().get_mut(&(post_id, user_id)) {
            reaction.kind = kind;
        }
        Ok(())
    }

    async fn delete(&self, post_id: Snowflake, user_id: Snowflake) -> RepoResult<()> {
        self.reactions.lock().unwrap().remove(&(post_id, user_id));
        Ok(())
    }

    async fn count_by_kind(&self, post_id: Snowflake) -> RepoResult<Vec<(ReactionKind, i64)>> {
        let reactions = self.reactions.lock().unwrap();
        let mut grouped: HashMap<ReactionKind, i64> = HashMap::new();
        for reaction in reactions.values().filter(|r| r.post_id == post_id) {
            *grouped.entry(reaction.kind).or_insert(0) += 1;
        }
        Ok(grouped.into_iter().collect())
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        Ok(self.comments.lock().unwrap().get(&id).cloned())
    }

    async fn find_visible_scored(&self, post_id: Snowflake) -> RepoResult<Vec<ScoredComment>> {
        let comments = self.comments.lock().unwrap();
        let votes = self.votes.lock().unwrap();
        Ok(comments
            .values()
            .filter(|c| c.post_id == post_id && c.is_visible())
            .map(|c| {
                let mut up_votes = 0;
                let mut down_votes = 0;
                for vote in votes.values().filter(|v| v.comment_id == c.id) {
                    match vote.value {
                        VoteValue::Up => up_votes += 1,
                        VoteValue::Down => down_votes += 1,
                        VoteValue::Neutral => {}
                    }
                }
                ScoredComment {
                    comment: c.clone(),
                    up_votes,
                    down_votes,
                    total_score: up_votes - down_votes,
                }
            })
            .collect())
    }

    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        self.comments
            .lock()
            .unwrap()
            .insert(comment.id, comment.clone());
        Ok(())
    }

    async fn set_pinned(&self, id: Snowflake, pinned: bool) -> RepoResult<()> {
        if let Some(comment) = self.comments.lock().unwrap().get_mut(&id) {
            comment.pinned = pinned;
        }
        Ok(())
    }

    async fn set_approved(&self, id: Snowflake, approved: bool) -> RepoResult<()> {
        if let Some(comment) = self.comments.lock().unwrap().get_mut(&id) {
            comment.is_approved = approved;
        }
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        if let Some(comment) = self.comments.lock().unwrap().get_mut(&id) {
            comment.active = false;
        }
        Ok(())
    }
}

#[async_trait]
impl VoteRepository for InMemoryStore {
    async fn get_or_create(
        &self,
        comment_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<CommentVote> {
        let mut votes = self.votes.lock().unwrap();
        Ok(*votes
            .entry((comment_id, user_id))
            .or_insert_with(|| CommentVote::new(comment_id, user_id, VoteValue::Neutral)))
    }

    async fn update_value(
        &self,
        comment_id: Snowflake,
        user_id: Snowflake,
        value: VoteValue,
    ) -> RepoResult<()> {
        if let Some(vote) = self.votes.lock().unwrap().get_mut(&(comment_id, user_id)) {
            vote.value = value;
        }
        Ok(())
    }

    async fn counts(&self, comment_id: Snowflake) -> RepoResult<VoteCounts> {
        let votes = self.votes.lock().unwrap();
        let mut counts = VoteCounts::default();
        for vote in votes.values().filter(|v| v.comment_id == comment_id) {
            match vote.value {
                VoteValue::Up => {
                    counts.up += 1;
                    counts.total += 1;
                }
                VoteValue::Down => {
                    counts.down += 1;
                    counts.total -= 1;
                }
                VoteValue::Neutral => {}
            }
        }
        Ok(counts)
    }

    async fn find_by_post_user(
        &self,
        post_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Vec<CommentVote>> {
        let comments = self.comments.lock().unwrap();
        let votes = self.votes.lock().unwrap();
        Ok(votes
            .values()
            .filter(|v| {
                v.user_id == user_id
                    && v.value != VoteValue::Neutral
                    && comments
                        .get(&v.comment_id)
                        .is_some_and(|c| c.post_id == post_id)
            })
            .copied()
            .collect())
    }
}

#[async_trait]
impl ReviewRepository for InMemoryStore {
    async fn find(&self, post_id: Snowflake, user_id: Snowflake) -> RepoResult<Option<Review>> {
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .get(&(post_id, user_id))
            .cloned())
    }

    async fn try_create(&self, review: &Review) -> RepoResult<bool> {
        let mut reviews = self.reviews.lock().unwrap();
        let key = (review.post_id, review.user_id);
        if reviews.contains_key(&key) {
            return Ok(false);
        }
        reviews.insert(key, review.clone());
        Ok(true)
    }

    async fn average_rating(&self, post_id: Snowflake) -> RepoResult<Option<f64>> {
        let reviews = self.reviews.lock().unwrap();
        let ratings: Vec<i16> = reviews
            .values()
            .filter(|r| r.post_id == post_id)
            .map(|r| r.rating)
            .collect();
        if ratings.is_empty() {
            return Ok(None);
        }
        let sum: i64 = ratings.iter().map(|r| i64::from(*r)).sum();
        Ok(Some(sum as f64 / ratings.len() as f64))
    }

    async fn count(&self, post_id: Snowflake) -> RepoResult<i64> {
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.post_id == post_id)
            .count() as i64)
    }
}

#[async_trait]
impl NotificationRepository for InMemoryStore {
    async fn create(&self, notification: &Notification) -> RepoResult<()> {
        self.notifications.lock().unwrap().push(notification.clone());
        Ok(())
    }

    async fn find_by_recipient(
        &self,
        recipient_id: Snowflake,
        limit: i64,
    ) -> RepoResult<Vec<Notification>> {
        let mut matching = self.notifications_for(recipient_id);
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matching.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(matching)
    }

    async fn mark_read(&self, id: Snowflake, recipient_id: Snowflake) -> RepoResult<bool> {
        let mut notifications = self.notifications.lock().unwrap();
        match notifications
            .iter_mut()
            .find(|n| n.id == id && n.recipient_id == recipient_id)
        {
            Some(notification) => {
                notification.is_read = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn unread_count(&self, recipient_id: Snowflake) -> RepoResult<i64> {
        Ok(self
            .notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.recipient_id == recipient_id && !n.is_read)
            .count() as i64)
    }
}

#[async_trait]
impl SubscriptionRepository for InMemoryStore {
    async fn try_create(&self, subscription: &Subscription) -> RepoResult<bool> {
        Ok(self
            .subscriptions
            .lock()
            .unwrap()
            .insert((subscription.subscriber_id, subscription.author_id)))
    }

    async fn delete(&self, subscriber_id: Snowflake, author_id: Snowflake) -> RepoResult<bool> {
        Ok(self
            .subscriptions
            .lock()
            .unwrap()
            .remove(&(subscriber_id, author_id)))
    }

    async fn exists(&self, subscriber_id: Snowflake, author_id: Snowflake) -> RepoResult<bool> {
        Ok(self
            .subscriptions
            .lock()
            .unwrap()
            .contains(&(subscriber_id, author_id)))
    }

    async fn find_subscribers(&self, author_id: Snowflake) -> RepoResult<Vec<Snowflake>> {
        Ok(self
            .subscriptions
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, a)| *a == author_id)
            .map(|(s, _)| *s)
            .collect())
    }
}

// ============================================================================
// Fixture
// ============================================================================

fn fixture(reaction_cooldown: Duration) -> (Arc<InMemoryStore>, ServiceContext) {
    let store = Arc::new(InMemoryStore::default());
    let ctx = ServiceContextBuilder::new()
        .post_repo(store.clone())
        .user_repo(store.clone())
        .comment_repo(store.clone())
        .reaction_repo(store.clone())
        .vote_repo(store.clone())
        .review_repo(store.clone())
        .notification_repo(store.clone())
        .subscription_repo(store.clone())
        .cooldown_store(Arc::new(MemoryCooldownStore::new()))
        .jwt_service(Arc::new(JwtService::new("test-secret", 3600)))
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(0)))
        .reaction_cooldown(reaction_cooldown)
        .build()
        .unwrap();
    (store, ctx)
}

// ============================================================================
// Reactions
// ============================================================================

#[tokio::test]
async fn test_reaction_cycle_add_change_remove() {
    let (store, ctx) = fixture(Duration::ZERO);
    let author = store.seed_user(1, "author", false);
    let reader = store.seed_user(2, "reader", false);
    let post = store.seed_post(10, author.into_inner());
    let service = ReactionService::new(&ctx);

    let added = service.toggle(post, reader, "like").await.unwrap();
    assert_eq!(added.action, ToggleAction::Added);
    assert_eq!(added.kind.as_deref(), Some("like"));
    assert_eq!(added.counts.like, 1);
    assert_eq!(added.counts.total(), 1);

    let changed = service.toggle(post, reader, "love").await.unwrap();
    assert_eq!(changed.action, ToggleAction::Changed);
    assert_eq!(changed.kind.as_deref(), Some("love"));
    assert_eq!(changed.counts.like, 0);
    assert_eq!(changed.counts.love, 1);

    let removed = service.toggle(post, reader, "love").await.unwrap();
    assert_eq!(removed.action, ToggleAction::Removed);
    assert_eq!(removed.kind, None);
    assert_eq!(removed.counts.total(), 0);
}

#[tokio::test]
async fn test_reaction_blocked_within_cooldown_changes_nothing() {
    let (store, ctx) = fixture(Duration::from_secs(60));
    let author = store.seed_user(1, "author", false);
    let reader = store.seed_user(2, "reader", false);
    let post = store.seed_post(10, author.into_inner());
    let service = ReactionService::new(&ctx);

    let added = service.toggle(post, reader, "haha").await.unwrap();
    assert_eq!(added.action, ToggleAction::Added);

    let blocked = service.toggle(post, reader, "haha").await;
    assert!(matches!(blocked, Err(ServiceError::RateLimited)));

    // The stored reaction survives the denied toggle
    let counts = service.counts(post).await.unwrap();
    assert_eq!(counts.haha, 1);
    assert_eq!(counts.total(), 1);
}

#[tokio::test]
async fn test_reaction_cooldown_is_per_user_per_post() {
    let (store, ctx) = fixture(Duration::from_secs(60));
    let author = store.seed_user(1, "author", false);
    let reader = store.seed_user(2, "reader", false);
    let post_a = store.seed_post(10, author.into_inner());
    let post_b = store.seed_post(11, author.into_inner());
    let service = ReactionService::new(&ctx);

    assert!(service.toggle(post_a, reader, "like").await.is_ok());
    assert!(service.toggle(post_b, reader, "like").await.is_ok());
    assert!(service.toggle(post_a, author, "wow").await.is_ok());
}

#[tokio::test]
async fn test_reaction_unknown_kind_rejected() {
    let (store, ctx) = fixture(Duration::ZERO);
    let author = store.seed_user(1, "author", false);
    let post = store.seed_post(10, author.into_inner());
    let service = ReactionService::new(&ctx);

    let err = service.toggle(post, author, "angry").await.unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::UnknownReactionKind(_))
    ));
}

#[tokio::test]
async fn test_reaction_on_missing_post() {
    let (store, ctx) = fixture(Duration::ZERO);
    let reader = store.seed_user(2, "reader", false);
    let service = ReactionService::new(&ctx);

    let err = service
        .toggle(Snowflake::new(999), reader, "like")
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_first_reaction_notifies_post_author() {
    let (store, ctx) = fixture(Duration::ZERO);
    let author = store.seed_user(1, "author", false);
    let reader = store.seed_user(2, "reader", false);
    let post = store.seed_post(10, author.into_inner());
    let service = ReactionService::new(&ctx);

    service.toggle(post, reader, "wow").await.unwrap();
    let received = store.notifications_for(author);
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].message, "@reader reacted with wow to your post.");
    assert_eq!(received[0].comment_id, None);

    // Removing the reaction notifies nobody
    service.toggle(post, reader, "wow").await.unwrap();
    assert_eq!(store.notifications_for(author).len(), 1);

    // Reacting to your own post notifies nobody
    service.toggle(post, author, "like").await.unwrap();
    assert_eq!(store.notifications_for(author).len(), 1);
}

// ============================================================================
// Votes
// ============================================================================

#[tokio::test]
async fn test_vote_toggle_clears_and_flips_directly() {
    let (store, ctx) = fixture(Duration::ZERO);
    let author = store.seed_user(1, "author", false);
    let reader = store.seed_user(2, "reader", false);
    let post = store.seed_post(10, author.into_inner());
    store.seed_comment(100, post, author, 0);
    let comment = Snowflake::new(100);
    let service = VoteService::new(&ctx);

    let up = service.toggle(comment, reader, "up").await.unwrap();
    assert_eq!(up.current_value, 1);
    assert_eq!(up.up_votes, 1);
    assert_eq!(up.total_score, 1);

    // Same direction again clears
    let cleared = service.toggle(comment, reader, "up").await.unwrap();
    assert_eq!(cleared.current_value, 0);
    assert_eq!(cleared.total_score, 0);

    // Down from neutral
    let down = service.toggle(comment, reader, "down").await.unwrap();
    assert_eq!(down.current_value, -1);
    assert_eq!(down.total_score, -1);

    // Opposite direction flips in one step, no neutral in between
    let flipped = service.toggle(comment, reader, "up").await.unwrap();
    assert_eq!(flipped.current_value, 1);
    assert_eq!(flipped.up_votes, 1);
    assert_eq!(flipped.down_votes, 0);
}

#[tokio::test]
async fn test_votes_are_not_rate_limited() {
    let (store, ctx) = fixture(Duration::from_secs(60));
    let author = store.seed_user(1, "author", false);
    let reader = store.seed_user(2, "reader", false);
    let post = store.seed_post(10, author.into_inner());
    store.seed_comment(100, post, author, 0);
    let comment = Snowflake::new(100);
    let service = VoteService::new(&ctx);

    for direction in ["up", "up", "down", "down", "up"] {
        assert!(service.toggle(comment, reader, direction).await.is_ok());
    }
}

#[tokio::test]
async fn test_vote_rejected_on_hidden_comment() {
    let (store, ctx) = fixture(Duration::ZERO);
    let author = store.seed_user(1, "author", false);
    let reader = store.seed_user(2, "reader", false);
    let post = store.seed_post(10, author.into_inner());
    store.seed_comment(100, post, author, 0);
    store.set_approved(Snowflake::new(100), false).await.unwrap();
    let service = VoteService::new(&ctx);

    let err = service
        .toggle(Snowflake::new(100), reader, "down")
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_vote_unknown_direction_rejected() {
    let (store, ctx) = fixture(Duration::ZERO);
    let author = store.seed_user(1, "author", false);
    let post = store.seed_post(10, author.into_inner());
    store.seed_comment(100, post, author, 0);
    let service = VoteService::new(&ctx);

    let err = service
        .toggle(Snowflake::new(100), author, "sideways")
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
}

// ============================================================================
// Engagement reads
// ============================================================================

#[tokio::test]
async fn test_engagement_ranks_comments_for_display() {
    let (store, ctx) = fixture(Duration::ZERO);
    let author = store.seed_user(1, "author", false);
    let alice = store.seed_user(2, "alice", false);
    let bob = store.seed_user(3, "bob", false);
    let post = store.seed_post(10, author.into_inner());

    store.seed_comment(101, post, alice, 0); // oldest, no votes
    store.seed_comment(102, post, bob, 1); // upvoted twice
    store.seed_comment(103, post, alice, 2); // pinned, downvoted
    store.seed_comment(104, post, bob, 3); // no votes, newest
    store.set_pinned(Snowflake::new(103), true).await.unwrap();

    let votes = VoteService::new(&ctx);
    votes.toggle(Snowflake::new(102), alice, "up").await.unwrap();
    votes.toggle(Snowflake::new(102), author, "up").await.unwrap();
    votes.toggle(Snowflake::new(103), bob, "down").await.unwrap();

    let engagement = EngagementService::new(&ctx)
        .get_engagement(post, Some(alice))
        .await
        .unwrap();

    let order: Vec<&str> = engagement.comments.iter().map(|c| c.id.as_str()).collect();
    // Pinned first despite its negative score, then score desc, then oldest first
    assert_eq!(order, vec!["103", "102", "101", "104"]);

    assert_eq!(engagement.comments[0].total_score, -1);
    assert_eq!(engagement.comments[1].up_votes, 2);
    // Viewer flags: alice upvoted 102 and nothing else
    assert_eq!(engagement.comments[1].my_vote, 1);
    assert_eq!(engagement.comments[0].my_vote, 0);
}

#[tokio::test]
async fn test_engagement_with_no_activity() {
    let (store, ctx) = fixture(Duration::ZERO);
    let author = store.seed_user(1, "author", false);
    let post = store.seed_post(10, author.into_inner());

    let engagement = EngagementService::new(&ctx)
        .get_engagement(post, None)
        .await
        .unwrap();

    // Every reaction kind is present at zero, and the rating is absent, not 0
    assert_eq!(engagement.reactions.like, 0);
    assert_eq!(engagement.reactions.love, 0);
    assert_eq!(engagement.reactions.haha, 0);
    assert_eq!(engagement.reactions.wow, 0);
    assert_eq!(engagement.reaction_total, 0);
    assert_eq!(engagement.average_rating, None);
    assert_eq!(engagement.review_count, 0);
    assert_eq!(engagement.my_reaction, None);
    assert!(!engagement.has_reviewed);
    assert!(!engagement.is_subscribed_to_author);
    assert!(engagement.comments.is_empty());
}

#[tokio::test]
async fn test_engagement_viewer_review_and_subscription_flags() {
    let (store, ctx) = fixture(Duration::ZERO);
    let author = store.seed_user(1, "author", false);
    let reader = store.seed_user(2, "reader", false);
    let post = store.seed_post(10, author.into_inner());

    ReviewService::new(&ctx)
        .add_review(
            post,
            reader,
            AddReviewRequest {
                rating: 4,
                comment: None,
            },
        )
        .await
        .unwrap();
    SubscriptionService::new(&ctx)
        .subscribe(reader, author)
        .await
        .unwrap();

    let service = EngagementService::new(&ctx);
    let as_reader = service.get_engagement(post, Some(reader)).await.unwrap();
    assert!(as_reader.has_reviewed);
    assert!(as_reader.is_subscribed_to_author);

    // The author and anonymous readers never see the flags set
    let as_author = service.get_engagement(post, Some(author)).await.unwrap();
    assert!(!as_author.has_reviewed);
    assert!(!as_author.is_subscribed_to_author);

    let anonymous = service.get_engagement(post, None).await.unwrap();
    assert!(!anonymous.has_reviewed);
    assert!(!anonymous.is_subscribed_to_author);
}

#[tokio::test]
async fn test_draft_post_has_no_engagement_surface() {
    let (store, ctx) = fixture(Duration::ZERO);
    let author = store.seed_user(1, "author", false);
    let reader = store.seed_user(2, "reader", false);
    let draft = store.seed_draft_post(10, author.into_inner());

    let err = EngagementService::new(&ctx)
        .get_engagement(draft, Some(reader))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);

    let err = CommentService::new(&ctx)
        .add_comment(
            draft,
            reader,
            AddCommentRequest {
                content: "too early".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_engagement_viewer_reaction() {
    let (store, ctx) = fixture(Duration::ZERO);
    let author = store.seed_user(1, "author", false);
    let reader = store.seed_user(2, "reader", false);
    let post = store.seed_post(10, author.into_inner());

    ReactionService::new(&ctx)
        .toggle(post, reader, "haha")
        .await
        .unwrap();

    let service = EngagementService::new(&ctx);
    let as_reader = service.get_engagement(post, Some(reader)).await.unwrap();
    assert_eq!(as_reader.my_reaction.as_deref(), Some("haha"));

    let anonymous = service.get_engagement(post, None).await.unwrap();
    assert_eq!(anonymous.my_reaction, None);
    assert_eq!(anonymous.reactions.haha, 1);
}

// ============================================================================
// Reviews
// ============================================================================

#[tokio::test]
async fn test_review_once_per_user_and_average() {
    let (store, ctx) = fixture(Duration::ZERO);
    let author = store.seed_user(1, "author", false);
    let alice = store.seed_user(2, "alice", false);
    let bob = store.seed_user(3, "bob", false);
    let post = store.seed_post(10, author.into_inner());
    let service = ReviewService::new(&ctx);

    let review = service
        .add_review(
            post,
            alice,
            AddReviewRequest {
                rating: 5,
                comment: Some("great".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(review.rating, 5);

    let duplicate = service
        .add_review(
            post,
            alice,
            AddReviewRequest {
                rating: 1,
                comment: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(duplicate.status_code(), 409);

    service
        .add_review(
            post,
            bob,
            AddReviewRequest {
                rating: 2,
                comment: None,
            },
        )
        .await
        .unwrap();

    let engagement = EngagementService::new(&ctx)
        .get_engagement(post, None)
        .await
        .unwrap();
    assert_eq!(engagement.review_count, 2);
    assert_eq!(engagement.average_rating, Some(3.5));
}

#[tokio::test]
async fn test_review_rating_out_of_range() {
    let (store, ctx) = fixture(Duration::ZERO);
    let author = store.seed_user(1, "author", false);
    let alice = store.seed_user(2, "alice", false);
    let post = store.seed_post(10, author.into_inner());

    let err = ReviewService::new(&ctx)
        .add_review(
            post,
            alice,
            AddReviewRequest {
                rating: 6,
                comment: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::RatingOutOfRange(6))
    ));
}

// ============================================================================
// Comments and notifications
// ============================================================================

#[tokio::test]
async fn test_comment_notifies_author_and_mentions() {
    let (store, ctx) = fixture(Duration::ZERO);
    let carol = store.seed_user(1, "carol", false);
    let alice = store.seed_user(2, "alice", false);
    let bob = store.seed_user(3, "bob", false);
    let post = store.seed_post(10, carol.into_inner());

    let comment = CommentService::new(&ctx)
        .add_comment(
            post,
            alice,
            AddCommentRequest {
                content: "thanks @bob and @alice, also @ghost".to_string(),
            },
        )
        .await
        .unwrap();

    // Post author gets a comment notification carrying the comment reference
    let to_carol = store.notifications_for(carol);
    assert_eq!(to_carol.len(), 1);
    assert_eq!(to_carol[0].message, "@alice commented on your post.");
    assert_eq!(to_carol[0].comment_id, Some(comment.id));

    // Mentioned user gets a mention notification
    let to_bob = store.notifications_for(bob);
    assert_eq!(to_bob.len(), 1);
    assert_eq!(to_bob[0].message, "@alice mentioned you in a comment.");
    assert_eq!(to_bob[0].comment_id, Some(comment.id));

    // Self-mentions and unknown usernames notify nobody
    assert!(store.notifications_for(alice).is_empty());
}

#[tokio::test]
async fn test_mentioning_post_author_yields_single_notification() {
    let (store, ctx) = fixture(Duration::ZERO);
    let carol = store.seed_user(1, "carol", false);
    let alice = store.seed_user(2, "alice", false);
    let post = store.seed_post(10, carol.into_inner());

    CommentService::new(&ctx)
        .add_comment(
            post,
            alice,
            AddCommentRequest {
                content: "nice one @carol, really @carol".to_string(),
            },
        )
        .await
        .unwrap();

    // The new-comment notification absorbs both mentions of the author
    let to_carol = store.notifications_for(carol);
    assert_eq!(to_carol.len(), 1);
    assert_eq!(to_carol[0].message, "@alice commented on your post.");
}

#[tokio::test]
async fn test_comment_on_own_post_notifies_nobody() {
    let (store, ctx) = fixture(Duration::ZERO);
    let carol = store.seed_user(1, "carol", false);
    let post = store.seed_post(10, carol.into_inner());

    CommentService::new(&ctx)
        .add_comment(
            post,
            carol,
            AddCommentRequest {
                content: "first!".to_string(),
            },
        )
        .await
        .unwrap();

    assert!(store.notifications_for(carol).is_empty());
}

#[tokio::test]
async fn test_blank_comment_rejected() {
    let (store, ctx) = fixture(Duration::ZERO);
    let carol = store.seed_user(1, "carol", false);
    let post = store.seed_post(10, carol.into_inner());

    let err = CommentService::new(&ctx)
        .add_comment(
            post,
            carol,
            AddCommentRequest {
                content: "   \n  ".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::EmptyContent)
    ));
}

#[tokio::test]
async fn test_new_comment_hidden_until_approved() {
    let (store, ctx) = fixture(Duration::ZERO);
    let carol = store.seed_user(1, "carol", false);
    let staff = store.seed_user(2, "mod", true);
    let alice = store.seed_user(3, "alice", false);
    let post = store.seed_post(10, carol.into_inner());
    let comments = CommentService::new(&ctx);
    let engagement = EngagementService::new(&ctx);

    let comment = comments
        .add_comment(
            post,
            alice,
            AddCommentRequest {
                content: "pending".to_string(),
            },
        )
        .await
        .unwrap();

    assert!(engagement
        .get_engagement(post, None)
        .await
        .unwrap()
        .comments
        .is_empty());

    // Non-staff cannot moderate
    let err = comments.approve(comment.id, alice).await.unwrap_err();
    assert_eq!(err.status_code(), 403);

    comments.approve(comment.id, staff).await.unwrap();
    let visible = engagement.get_engagement(post, None).await.unwrap();
    assert_eq!(visible.comments.len(), 1);

    // Rejection soft-deletes
    comments.reject(comment.id, staff).await.unwrap();
    assert!(engagement
        .get_engagement(post, None)
        .await
        .unwrap()
        .comments
        .is_empty());
}

#[tokio::test]
async fn test_pin_allowed_for_post_author_and_staff_only() {
    let (store, ctx) = fixture(Duration::ZERO);
    let carol = store.seed_user(1, "carol", false);
    let staff = store.seed_user(2, "mod", true);
    let alice = store.seed_user(3, "alice", false);
    let post = store.seed_post(10, carol.into_inner());
    store.seed_comment(100, post, alice, 0);
    let comment = Snowflake::new(100);
    let service = CommentService::new(&ctx);

    let err = service.toggle_pin(comment, alice).await.unwrap_err();
    assert_eq!(err.status_code(), 403);

    assert!(service.toggle_pin(comment, carol).await.unwrap());
    assert!(!service.toggle_pin(comment, staff).await.unwrap());
}

// ============================================================================
// Notification feed
// ============================================================================

#[tokio::test]
async fn test_notification_list_and_mark_read() {
    let (store, ctx) = fixture(Duration::ZERO);
    let carol = store.seed_user(1, "carol", false);
    let alice = store.seed_user(2, "alice", false);
    let post = store.seed_post(10, carol.into_inner());

    CommentService::new(&ctx)
        .add_comment(
            post,
            alice,
            AddCommentRequest {
                content: "hello".to_string(),
            },
        )
        .await
        .unwrap();

    let service = NotificationService::new(&ctx);
    let feed = service.list(carol).await.unwrap();
    assert_eq!(feed.notifications.len(), 1);
    assert_eq!(feed.unread_count, 1);
    assert!(!feed.notifications[0].is_read);

    let id: Snowflake = feed.notifications[0].id.parse().unwrap();

    // A different recipient cannot read someone else's notification
    let err = service.open(id, alice).await.unwrap_err();
    assert_eq!(err.status_code(), 404);

    service.open(id, carol).await.unwrap();
    let feed = service.list(carol).await.unwrap();
    assert_eq!(feed.unread_count, 0);
    assert!(feed.notifications[0].is_read);
}

// ============================================================================
// Subscriptions
// ============================================================================

#[tokio::test]
async fn test_subscription_flow() {
    let (store, ctx) = fixture(Duration::ZERO);
    let carol = store.seed_user(1, "carol", false);
    let alice = store.seed_user(2, "alice", false);
    let service = SubscriptionService::new(&ctx);

    let subscribed = service.subscribe(alice, carol).await.unwrap();
    assert!(subscribed.subscribed);
    assert!(service.is_subscribed(alice, carol).await.unwrap());

    let duplicate = service.subscribe(alice, carol).await.unwrap_err();
    assert_eq!(duplicate.status_code(), 409);

    let unsubscribed = service.unsubscribe(alice, carol).await.unwrap();
    assert!(!unsubscribed.subscribed);
    assert!(!service.is_subscribed(alice, carol).await.unwrap());

    let gone = service.unsubscribe(alice, carol).await.unwrap_err();
    assert_eq!(gone.status_code(), 404);
}

#[tokio::test]
async fn test_self_subscription_rejected() {
    let (store, ctx) = fixture(Duration::ZERO);
    let carol = store.seed_user(1, "carol", false);

    let err = SubscriptionService::new(&ctx)
        .subscribe(carol, carol)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::SelfSubscription)
    ));
}
