/// Songbook - terminal client for the playlist sharing service
mod config;
mod render;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use config::AppConfig;
use songbook_client::{thumbnail_from_path, SongbookClient};
use songbook_core::{Credentials, PlaylistId, Route, SongId};
use songbook_pages::{
    AddSongPage, LoginPage, NoticeKind, PlaylistSongsPage, PlaylistsPage, SongPage,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "songbook")]
#[command(about = "Browse and share playlists from the terminal", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with username and password
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long, env = "SONGBOOK_PASSWORD")]
        password: String,
    },
    /// List all playlists
    Playlists,
    /// Show the songs of a playlist
    Songs {
        /// Playlist id
        id: String,
        /// Only songs whose title or artist contains this text
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Show a song with its comments
    Song {
        /// Song id
        id: String,
    },
    /// Submit a new song
    AddSong {
        #[arg(long)]
        title: String,
        #[arg(long)]
        artist: String,
        #[arg(long)]
        description: String,
        /// Media URL (YouTube link)
        #[arg(long)]
        source: String,
        /// PNG or JPEG image, at most 2 MiB
        #[arg(long)]
        thumbnail: PathBuf,
    },
    /// Render a page by its path, e.g. `/songPlaylists/42`
    Open {
        route: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "songbook=info,songbook_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    config.validate()?;
    tracing::debug!(base_url = %config.base_url, auth_url = %config.auth_url, "Configuration loaded");

    let client = SongbookClient::new(config.client_config())?;

    match cli.command {
        Commands::Login { username, password } => login(&client, username, password).await,
        Commands::Playlists => show_playlists(&client).await,
        Commands::Songs { id, search } => show_playlist(&client, PlaylistId::new(id), search).await,
        Commands::Song { id } => show_song(&client, SongId::new(id)).await,
        Commands::AddSong {
            title,
            artist,
            description,
            source,
            thumbnail,
        } => {
            let mut page = AddSongPage::new();
            page.draft.title = title;
            page.draft.artist = artist;
            page.draft.description = description;
            page.draft.source = source;
            page.draft.thumbnail = Some(
                thumbnail_from_path(&thumbnail)
                    .await
                    .with_context(|| format!("reading {}", thumbnail.display()))?,
            );
            add_song(&client, page).await
        }
        Commands::Open { route } => open(&client, route.parse()?).await,
    }
}

async fn open(client: &SongbookClient, route: Route) -> anyhow::Result<()> {
    match route {
        Route::Playlists => show_playlists(client).await,
        Route::PlaylistSongs(id) => show_playlist(client, id, String::new()).await,
        Route::Song(id) => show_song(client, id).await,
        Route::Login => bail!("/login needs credentials; use `songbook login`"),
        Route::AddSong => bail!("/addSong needs form input; use `songbook add-song`"),
    }
}

async fn login(client: &SongbookClient, username: String, password: String) -> anyhow::Result<()> {
    let mut page = LoginPage::new();
    page.credentials = Credentials::new(username, password);

    match page.submit(client).await {
        Some(next) => {
            println!("Logged in.");
            if let Some(token) = page.session().and_then(|s| s.access_token.as_deref()) {
                println!("Token: {token}");
            }
            open(client, next).await
        }
        None => bail!("{}", page.error().unwrap_or("Login failed")),
    }
}

async fn show_playlists(client: &SongbookClient) -> anyhow::Result<()> {
    let mut page = PlaylistsPage::new();
    page.load(client).await;
    print!("{}", render::playlists(&page));
    Ok(())
}

async fn show_playlist(client: &SongbookClient, id: PlaylistId, search: String) -> anyhow::Result<()> {
    let mut page = PlaylistSongsPage::new();
    page.set_search(search);
    page.load(client, id).await;
    print!("{}", render::playlist_songs(&page, &client.thumbnails()));
    Ok(())
}

async fn show_song(client: &SongbookClient, id: SongId) -> anyhow::Result<()> {
    let mut page = SongPage::new();
    page.load(client, id).await;
    print!("{}", render::song(&page));
    Ok(())
}

async fn add_song(client: &SongbookClient, mut page: AddSongPage) -> anyhow::Result<()> {
    page.submit(client).await;
    match page.notice() {
        Some(notice) if notice.kind == NoticeKind::Error => bail!("{}", notice.text),
        _ => {
            print!("{}", render::add_song(&page));
            Ok(())
        }
    }
}
