use super::timeline::Timeline;
use super::Post;
use crate::user::profile::ProfilePage;
use crate::user::session::Session;

use std::fmt::{self, Display, Formatter, Write};
use time::UtcOffset;

pub const COMPOSER_PLACEHOLDER: &str = "What's on your mind?";

const NO_AVATAR: &str = "no avatar";

///
/// One post: avatar, author, when it was written and what it says.
///
pub struct PostView<'a> {
    post: &'a Post,
    offset: UtcOffset,
    avatar: Option<&'a str>,
    delete_control: bool,
}

impl<'a> PostView<'a> {
    pub fn new(post: &'a Post, offset: UtcOffset) -> Self {
        Self {
            post,
            offset,
            avatar: post.avatar_url(),
            delete_control: false,
        }
    }

    /// Show `avatar` instead of the one embedded in the post's author.
    pub fn with_avatar(mut self, avatar: Option<&'a str>) -> Self {
        self.avatar = avatar;
        self
    }

    pub fn with_delete_control(mut self, visible: bool) -> Self {
        self.delete_control = visible;
        self
    }
}

impl Display for PostView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let post = self.post;
        write!(
            f,
            "[{}] {} (/profile/{})",
            self.avatar.unwrap_or(NO_AVATAR),
            post.author.username,
            post.author_id
        )?;
        if self.delete_control {
            write!(f, "  [delete #{}]", post.id)?;
        }
        writeln!(f)?;
        writeln!(f, "  {}", post.created_at.to_locale_string(self.offset))?;
        for line in post.content.lines() {
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}

///
/// The composer followed by every post, newest first.
///
pub struct TimelineView<'a> {
    timeline: &'a Timeline,
    offset: UtcOffset,
}

impl<'a> TimelineView<'a> {
    pub fn new(timeline: &'a Timeline, offset: UtcOffset) -> Self {
        Self { timeline, offset }
    }
}

impl Display for TimelineView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let composer = self.timeline.composer();
        if composer.is_empty() {
            writeln!(f, "> {COMPOSER_PLACEHOLDER}")?;
        } else {
            writeln!(f, "> {composer}")?;
        }

        for post in self.timeline.posts() {
            writeln!(f)?;
            write!(f, "{}", PostView::new(post, self.offset))?;
        }
        Ok(())
    }
}

///
/// Profile header and the user's posts.
///
/// Edit and delete controls only appear for the profile owner.
///
pub struct ProfileView<'a> {
    page: &'a ProfilePage,
    session: &'a Session,
    offset: UtcOffset,
}

impl<'a> ProfileView<'a> {
    pub fn new(page: &'a ProfilePage, session: &'a Session, offset: UtcOffset) -> Self {
        Self {
            page,
            session,
            offset,
        }
    }
}

impl Display for ProfileView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let page = self.page;
        let controls = page.controls_visible(self.session);
        let avatar = page.profile().profile_image_url.as_deref();

        let mut header = format!("[{}] ", avatar.unwrap_or(NO_AVATAR));
        if page.is_editing() {
            write!(header, "username: [{}]", page.username())?;
        } else {
            header.push_str(page.username());
        }
        if controls {
            header.push_str(if page.is_editing() { "  [save]" } else { "  [edit]" });
        }
        writeln!(f, "{header}")?;

        if page.is_editing() {
            writeln!(f, "  bio: [{}]", page.bio())?;
        } else if !page.bio().is_empty() {
            writeln!(f, "  {}", page.bio())?;
        }

        for post in page.posts() {
            writeln!(f)?;
            write!(
                f,
                "{}",
                PostView::new(post, self.offset)
                    .with_avatar(avatar)
                    .with_delete_control(controls)
            )?;
        }

        if controls {
            writeln!(f)?;
            writeln!(f, "[delete account]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{test_post, test_profile};

    #[test]
    fn post_shows_author_and_locale_timestamp() {
        let post = test_post(1, 7);
        let rendered = PostView::new(&post, UtcOffset::UTC).to_string();

        assert_eq!(
            "[https://img.example.com/7.png] user7 (/profile/7)\n  2023/5/1 12:00:00\n  post number 1\n",
            rendered
        );
    }

    #[test]
    fn post_timestamp_follows_offset() {
        let post = test_post(1, 7);
        let offset = UtcOffset::from_hms(9, 0, 0).unwrap();
        let rendered = PostView::new(&post, offset).to_string();

        assert!(rendered.contains("2023/5/1 21:00:00"));
    }

    #[test]
    fn empty_timeline_shows_placeholder() {
        let rendered = TimelineView::new(&Timeline::default(), UtcOffset::UTC).to_string();
        assert_eq!("> What's on your mind?\n", rendered);
    }

    #[test]
    fn timeline_lists_posts_in_order() {
        let timeline = Timeline::new(vec![test_post(2, 1), test_post(1, 1)]);
        let rendered = TimelineView::new(&timeline, UtcOffset::UTC).to_string();

        let second = rendered.find("post number 2").unwrap();
        let first = rendered.find("post number 1").unwrap();
        assert!(second < first);
    }

    #[test]
    fn profile_controls_only_for_owner() {
        let page = ProfilePage::new(test_profile(1), vec![test_post(5, 1)]);

        let visitor = ProfileView::new(&page, &Session::anonymous(), UtcOffset::UTC).to_string();
        assert!(!visitor.contains("[edit]"));
        assert!(!visitor.contains("[delete #5]"));
        assert!(!visitor.contains("[delete account]"));
        assert!(visitor.contains("user1"));
        assert!(visitor.contains("hello there"));
    }

    #[test]
    fn profile_owner_sees_controls_and_profile_avatar() {
        let mut post = test_post(5, 1);
        post.author.profile = None;
        let page = ProfilePage::new(test_profile(1), vec![post]);
        let session = Session::authenticated(
            crate::user::auth::BearerToken::parse("t0k3n").unwrap(),
            crate::test::test_user(1),
        );

        let owner = ProfileView::new(&page, &session, UtcOffset::UTC).to_string();
        assert!(owner.starts_with("[https://img.example.com/1.png] user1  [edit]\n"));
        assert!(owner.contains("[https://img.example.com/1.png] user1 (/profile/1)  [delete #5]"));
        assert!(owner.contains("[delete account]"));
    }

    #[test]
    fn profile_in_edit_mode_shows_drafts() {
        let mut page = ProfilePage::new(test_profile(1), vec![]);
        let session = Session::authenticated(
            crate::user::auth::BearerToken::parse("t0k3n").unwrap(),
            crate::test::test_user(1),
        );
        page.toggle_edit();
        page.set_username("hana");

        let rendered = ProfileView::new(&page, &session, UtcOffset::UTC).to_string();
        assert!(rendered.contains("username: [hana]  [save]"));
        assert!(rendered.contains("  bio: [hello there]"));
    }
}
