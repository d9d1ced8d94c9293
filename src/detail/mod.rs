//! Per-item detail session.
//!
//! Opening an item seeds a local comment thread and a like toggle. Everything
//! here is session-local: likes and comments added by the user never flow back
//! into the catalog or the query pipeline.

use crate::domain::CatalogItem;
use serde::{Deserialize, Serialize};

/// Username attached to comments posted from the detail view.
const CURRENT_USER: &str = "current_user";

/// Number of fixed comments every thread starts from.
const DEFAULT_COMMENT_COUNT: usize = 2;

/// Randomness needed to seed synthetic comments.
pub trait CommentSeeder {
    /// Numeric suffix for a generated username, 0-999.
    fn username_suffix(&mut self) -> u32;

    /// Age of a generated comment in hours, 0-23.
    fn hours_ago(&mut self) -> u32;
}

/// One comment in a detail thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub username: String,
    pub text: String,
    pub timestamp: String,
}

impl Comment {
    fn new(id: u64, username: impl Into<String>, text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            text: text.into(),
            timestamp: timestamp.into(),
        }
    }
}

fn default_comments() -> [Comment; DEFAULT_COMMENT_COUNT] {
    [
        Comment::new(1, "user123", "This is hilarious! 😂", "2 hours ago"),
        Comment::new(2, "meme_lover", "Perfect use of this template!", "1 day ago"),
    ]
}

/// Local state of the detail view for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSession {
    item: CatalogItem,
    liked: bool,
    likes_count: u32,
    comments: Vec<Comment>,
    draft: String,
}

impl DetailSession {
    /// Opens a session for `item`, seeding its comment thread.
    ///
    /// The thread holds the two fixed comments followed by `comments - 2`
    /// generated ones when the item's counter exceeds two. Smaller counters
    /// keep that many fixed comments, except zero which keeps both.
    ///
    /// # Example
    ///
    /// ```
    /// use memeverse::catalog::RandomMetadata;
    /// use memeverse::detail::DetailSession;
    /// use memeverse::domain::CatalogItem;
    ///
    /// let item = CatalogItem::builder("1", "Doge").likes(10).comments(5).build();
    /// let session = DetailSession::open(item, &mut RandomMetadata::from_seed(1));
    /// assert_eq!(session.comments().len(), 5);
    /// assert_eq!(session.likes_count(), 10);
    /// ```
    pub fn open(item: CatalogItem, seeder: &mut dyn CommentSeeder) -> Self {
        let wanted = item.comments as usize;
        let mut comments: Vec<Comment> = default_comments().into();

        if wanted > DEFAULT_COMMENT_COUNT {
            comments.extend((DEFAULT_COMMENT_COUNT + 1..=wanted).map(|n| {
                Comment::new(
                    n as u64,
                    format!("user{}", seeder.username_suffix()),
                    format!("Comment #{n} on this meme!"),
                    format!("{} hours ago", seeder.hours_ago()),
                )
            }));
        } else if wanted > 0 {
            comments.truncate(wanted);
        }

        tracing::debug!(item_id = %item.id, comment_count = comments.len(), "detail session opened");

        Self {
            likes_count: item.likes,
            item,
            liked: false,
            comments,
            draft: String::new(),
        }
    }

    #[must_use]
    pub const fn item(&self) -> &CatalogItem {
        &self.item
    }

    #[must_use]
    pub const fn liked(&self) -> bool {
        self.liked
    }

    #[must_use]
    pub const fn likes_count(&self) -> u32 {
        self.likes_count
    }

    /// Thread in display order, newest user comment first.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Flips the like and moves the count by one in the matching direction.
    pub fn toggle_like(&mut self) {
        if self.liked {
            self.likes_count = self.likes_count.saturating_sub(1);
        } else {
            self.likes_count = self.likes_count.saturating_add(1);
        }
        self.liked = !self.liked;
    }

    pub fn push_char(&mut self, c: char) {
        self.draft.push(c);
    }

    pub fn backspace(&mut self) {
        self.draft.pop();
    }

    pub fn clear_draft(&mut self) {
        self.draft.clear();
    }

    /// Posts the draft to the top of the thread.
    ///
    /// Blank drafts are ignored. Returns `true` if a comment was added.
    pub fn submit_comment(&mut self) -> bool {
        if self.draft.trim().is_empty() {
            return false;
        }

        let id = self.comments.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let text = std::mem::take(&mut self.draft);
        self.comments.insert(0, Comment::new(id, CURRENT_USER, text, "Just now"));

        tracing::debug!(item_id = %self.item.id, comment_id = id, "comment posted");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl CommentSeeder for Fixed {
        fn username_suffix(&mut self) -> u32 {
            42
        }
        fn hours_ago(&mut self) -> u32 {
            5
        }
    }

    fn open(comments: u32) -> DetailSession {
        let item = CatalogItem::builder("9", "Success Kid").likes(100).comments(comments).build();
        DetailSession::open(item, &mut Fixed)
    }

    #[test]
    fn many_comments_extend_the_defaults() {
        let session = open(4);
        let comments = session.comments();
        assert_eq!(comments.len(), 4);
        assert_eq!(comments[0].username, "user123");
        assert_eq!(comments[1].username, "meme_lover");
        assert_eq!(comments[2], Comment::new(3, "user42", "Comment #3 on this meme!", "5 hours ago"));
        assert_eq!(comments[3].id, 4);
    }

    #[test]
    fn small_counters_truncate_the_defaults() {
        assert_eq!(open(1).comments().len(), 1);
        assert_eq!(open(2).comments().len(), 2);
    }

    #[test]
    fn zero_counter_keeps_both_defaults() {
        assert_eq!(open(0).comments().len(), 2);
    }

    #[test]
    fn like_toggle_is_symmetric() {
        let mut session = open(0);
        assert!(!session.liked());
        session.toggle_like();
        assert!(session.liked());
        assert_eq!(session.likes_count(), 101);
        session.toggle_like();
        assert!(!session.liked());
        assert_eq!(session.likes_count(), 100);
    }

    #[test]
    fn submitted_comment_goes_first() {
        let mut session = open(3);
        for c in "so true".chars() {
            session.push_char(c);
        }
        assert!(session.submit_comment());
        assert_eq!(session.draft(), "");

        let first = &session.comments()[0];
        assert_eq!(first.username, "current_user");
        assert_eq!(first.text, "so true");
        assert_eq!(first.timestamp, "Just now");
        assert_eq!(first.id, 4);
        assert_eq!(session.comments().len(), 4);
    }

    #[test]
    fn blank_draft_is_ignored() {
        let mut session = open(2);
        session.push_char(' ');
        assert!(!session.submit_comment());
        assert_eq!(session.comments().len(), 2);
        session.backspace();
        assert_eq!(session.draft(), "");
    }

    #[test]
    fn catalog_item_is_untouched() {
        let mut session = open(2);
        session.toggle_like();
        assert_eq!(session.item().likes, 100);
    }
}
