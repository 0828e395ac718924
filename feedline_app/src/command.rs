use crate::shell;
use feedline_domain::api::FeedApi;
use feedline_domain::post::timeline::Timeline;
use feedline_domain::post::view::{ProfileView, TimelineView};
use feedline_domain::storage::LocalStorage;
use feedline_domain::user::auth::BearerToken;
use feedline_domain::user::profile::ProfilePage;
use feedline_domain::user::session::Session;
use feedline_domain::{PostId, UserId};

use anyhow::{anyhow, bail, Context};
use std::io::Write;
use time::UtcOffset;

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Store a bearer token and show who it belongs to
    Login { token: String },

    /// Forget the stored token
    Logout,

    /// Show the signed in user
    Whoami,

    /// Show the latest posts
    Timeline,

    /// Publish a post and show the timeline
    Post { content: String },

    /// Show a user's profile and posts
    Profile { user_id: i64 },

    /// Change the name or bio on your own profile
    EditProfile {
        user_id: i64,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        bio: Option<String>,
    },

    /// Delete one of your posts from your profile
    DeletePost { user_id: i64, post_id: i64 },

    /// Delete your account
    DeleteAccount { user_id: i64 },

    /// Interactive session on the timeline
    Shell,
}

pub async fn run(
    deps: &(impl FeedApi + LocalStorage),
    command: Command,
    offset: UtcOffset,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    // Login and logout replace the stored token, so it is not resolved first.
    let mut session = match command {
        Command::Login { .. } | Command::Logout => Session::anonymous(),
        _ => {
            let session = Session::restore(deps).await;
            tracing::debug!(user_id = ?session.user().map(|user| user.id), "session restored");
            session
        }
    };

    match command {
        Command::Login { token } => {
            login(deps, &mut session, &token, out).await?;
        }
        Command::Logout => {
            session.logout(deps).context("could not clear the stored token")?;
            writeln!(out, "logged out")?;
        }
        Command::Whoami => whoami(&session, out)?,
        Command::Timeline => {
            let timeline = Timeline::mount(deps, &session).await;
            write!(out, "{}", TimelineView::new(&timeline, offset))?;
        }
        Command::Post { content } => {
            let mut timeline = Timeline::mount(deps, &session).await;
            timeline.set_composer(content);
            timeline.submit(deps, &session).await?;
            write!(out, "{}", TimelineView::new(&timeline, offset))?;
        }
        Command::Profile { user_id } => {
            let page = ProfilePage::load(deps, UserId(user_id)).await?;
            write!(out, "{}", ProfileView::new(&page, &session, offset))?;
        }
        Command::EditProfile {
            user_id,
            username,
            bio,
        } => {
            let mut page = owned_page(deps, &session, UserId(user_id)).await?;
            page.toggle_edit();
            if let Some(username) = username {
                page.set_username(username);
            }
            if let Some(bio) = bio {
                page.set_bio(bio);
            }
            page.save(deps, &session)
                .await
                .context("could not update the profile")?;
            write!(out, "{}", ProfileView::new(&page, &session, offset))?;
        }
        Command::DeletePost { user_id, post_id } => {
            let post_id = PostId(post_id);
            let mut page = owned_page(deps, &session, UserId(user_id)).await?;
            if !page.posts().iter().any(|post| post.id == post_id) {
                bail!("post #{post_id} is not on profile #{user_id}");
            }
            page.delete_post(deps, &session, post_id)
                .await
                .context("could not delete the post")?;
            write!(out, "{}", ProfileView::new(&page, &session, offset))?;
        }
        Command::DeleteAccount { user_id } => {
            let page = owned_page(deps, &session, UserId(user_id)).await?;
            page.delete_account(deps, &session)
                .await
                .context("could not delete the account")?;
            writeln!(out, "account deletion requested")?;
        }
        Command::Shell => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            shell::run(deps, session, offset, stdin, out).await?;
        }
    }

    Ok(())
}

pub(crate) async fn login(
    deps: &(impl FeedApi + LocalStorage),
    session: &mut Session,
    token: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let token = BearerToken::parse(token).ok_or_else(|| anyhow!("the token must not be blank"))?;
    let user = session
        .login(deps, token)
        .await
        .context("the token was stored but no user could be resolved")?;
    writeln!(out, "logged in as {} <{}>", user.username, user.email)?;
    Ok(())
}

pub(crate) fn whoami(session: &Session, out: &mut impl Write) -> anyhow::Result<()> {
    match session.user() {
        Some(user) => writeln!(out, "{} <{}> (#{})", user.username, user.email, user.id)?,
        None => writeln!(out, "not logged in")?,
    }
    Ok(())
}

/// Load a profile page whose edit and delete controls are visible to `session`.
async fn owned_page(
    deps: &impl FeedApi,
    session: &Session,
    user_id: UserId,
) -> anyhow::Result<ProfilePage> {
    let page = ProfilePage::load(deps, user_id).await?;
    if !page.controls_visible(session) {
        bail!("profile #{user_id} does not belong to the signed in user");
    }
    Ok(page)
}
