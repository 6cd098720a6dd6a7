use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

const BOUNDARY: &str = "10-03-2024";

#[derive(Debug, Deserialize)]
struct GameCard {
    home_team: String,
    visitor_team: String,
    home_logo: String,
    punctuation: Option<f64>,
    color: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DayView {
    date: String,
    can_step_forward: bool,
    shown_date: Option<String>,
    shown_seq: Option<u64>,
    games: Vec<GameCard>,
    seq: u64,
    error: Option<String>,
}

struct TestServer {
    base_url: String,
    data_dir: PathBuf,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_dir() -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("topmatch_http_{}_{}", std::process::id(), nanos));
    path
}

fn write_slate(dir: &Path, key: &str, body: serde_json::Value) {
    let path = dir.join(format!("topmatchnba-{key}.json"));
    std::fs::write(path, serde_json::to_vec(&body).unwrap()).unwrap();
}

fn seed(root: &Path) -> (PathBuf, PathBuf) {
    let data_dir = root.join("data");
    let logo_dir = root.join("nba_logos");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::create_dir_all(&logo_dir).unwrap();

    write_slate(
        &data_dir,
        BOUNDARY,
        serde_json::json!([
            {
                "game": {
                    "home_team": { "team_name": "Celtics" },
                    "visitor_team": { "team_name": "Nuggets" }
                },
                "game_punctuation": 18
            },
            {
                "game": {
                    "home_team": { "team_name": "Pistons" },
                    "visitor_team": { "team_name": "Wizards" }
                },
                "game_punctuation": "n/a"
            }
        ]),
    );
    write_slate(
        &data_dir,
        "09-03-2024",
        serde_json::json!([
            {
                "game": {
                    "home_team": { "team_name": "Knicks" },
                    "visitor_team": { "team_name": "Heat" }
                },
                "game_punctuation": 13.5
            }
        ]),
    );
    std::fs::write(logo_dir.join("Celtics.png"), b"\x89PNG fake").unwrap();

    (data_dir, logo_dir)
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/day")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let (data_dir, logo_dir) = seed(&unique_dir());
    let child = Command::new(env!("CARGO_BIN_EXE_topmatch"))
        .env("PORT", port.to_string())
        .env("TOPMATCH_DATA_DIR", &data_dir)
        .env("TOPMATCH_LOGO_DIR", logo_dir)
        .env("TOPMATCH_BOUNDARY", BOUNDARY)
        .env("TOPMATCH_MAX_SCORE", "18")
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer {
        base_url,
        data_dir,
        child,
    }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn get_view(client: &Client, server: &TestServer) -> DayView {
    client
        .get(format!("{}/api/day", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn post_view(client: &Client, server: &TestServer, action: &str) -> DayView {
    let response = client
        .post(format!("{}/api/day/{action}", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    response.json().await.unwrap()
}

#[tokio::test]
async fn http_starts_at_boundary_with_colored_games() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let view = get_view(&client, &server).await;
    assert_eq!(view.date, BOUNDARY);
    assert!(!view.can_step_forward);
    assert_eq!(view.shown_date.as_deref(), Some(BOUNDARY));
    assert_eq!(view.games.len(), 2);

    let top = &view.games[0];
    assert_eq!(top.home_team, "Celtics");
    assert_eq!(top.visitor_team, "Nuggets");
    assert_eq!(top.home_logo, "nba_logos/Celtics.png");
    assert_eq!(top.color.as_deref(), Some("rgba(0, 255, 0)"));

    let invalid = &view.games[1];
    assert_eq!(invalid.color, None);
    assert_eq!(invalid.punctuation, None);
}

#[tokio::test]
async fn http_next_is_refused_at_boundary() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = get_view(&client, &server).await;
    let after = post_view(&client, &server, "next").await;
    assert_eq!(after.date, BOUNDARY);
    assert!(!after.can_step_forward);
    assert_eq!(after.seq, before.seq);
}

#[tokio::test]
async fn http_previous_then_next_round_trips() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let back = post_view(&client, &server, "previous").await;
    assert_eq!(back.date, "09-03-2024");
    assert!(back.can_step_forward);
    assert_eq!(back.shown_date.as_deref(), Some("09-03-2024"));
    assert_eq!(back.games[0].color.as_deref(), Some("rgba(255, 255, 0)"));
    assert_eq!(back.games[0].punctuation, Some(13.5));

    let forward = post_view(&client, &server, "next").await;
    assert_eq!(forward.date, BOUNDARY);
    assert!(!forward.can_step_forward);
    assert_eq!(forward.seq, back.seq + 1);
}

#[tokio::test]
async fn http_missing_day_keeps_previous_games() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    post_view(&client, &server, "previous").await;
    let missing = post_view(&client, &server, "previous").await;
    assert_eq!(missing.date, "08-03-2024");
    assert_eq!(missing.shown_date.as_deref(), Some("09-03-2024"));
    assert_eq!(missing.games[0].home_team, "Knicks");
    assert!(missing.error.unwrap().contains("08-03-2024"));

    post_view(&client, &server, "next").await;
    let home = post_view(&client, &server, "next").await;
    assert_eq!(home.date, BOUNDARY);
    assert_eq!(home.shown_date.as_deref(), Some(BOUNDARY));
    assert_eq!(home.error, None);
}

#[tokio::test]
async fn http_serves_logos() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let found = client
        .get(format!("{}/nba_logos/Celtics.png", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(found.status().is_success());
    assert_eq!(
        found.headers().get("content-type").unwrap(),
        "image/png"
    );

    let missing = client
        .get(format!("{}/nba_logos/Nuggets.png", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status().as_u16(), 404);

    let page = client.get(&server.base_url).send().await.unwrap();
    assert!(page.text().await.unwrap().contains("games-container"));
}

#[tokio::test]
async fn http_reload_picks_up_a_late_slate() {
    let _guard = TEST_LOCK.lock().await;
    let server = spawn_server().await;
    let client = Client::new();

    post_view(&client, &server, "previous").await;
    let missing = post_view(&client, &server, "previous").await;
    assert_eq!(missing.date, "08-03-2024");
    assert!(missing.error.is_some());
    assert_eq!(missing.shown_date.as_deref(), Some("09-03-2024"));
    assert!(missing.shown_seq.unwrap() < missing.seq);

    write_slate(
        &server.data_dir,
        "08-03-2024",
        serde_json::json!([
            {
                "game": {
                    "home_team": { "team_name": "Bucks" },
                    "visitor_team": { "team_name": "Suns" }
                },
                "game_punctuation": 9
            }
        ]),
    );

    let reloaded = post_view(&client, &server, "reload").await;
    assert_eq!(reloaded.date, "08-03-2024");
    assert_eq!(reloaded.shown_date.as_deref(), Some("08-03-2024"));
    assert_eq!(reloaded.error, None);
    assert_eq!(reloaded.seq, missing.seq + 1);
    assert_eq!(reloaded.shown_seq, Some(reloaded.seq));
    assert_eq!(reloaded.games[0].home_team, "Bucks");
    assert_eq!(reloaded.games[0].color.as_deref(), Some("rgba(255, 165, 0)"));
}

#[cfg(unix)]
#[tokio::test]
async fn http_ctrl_c_shuts_down_cleanly() {
    let _guard = TEST_LOCK.lock().await;
    let mut server = spawn_server().await;

    unsafe {
        libc::kill(server.child.id() as i32, libc::SIGINT);
    }

    let deadline = Instant::now() + Duration::from_secs(3);
    let status = loop {
        if let Some(status) = server.child.try_wait().unwrap() {
            break status;
        }
        if Instant::now() > deadline {
            panic!("server did not shut down");
        }
        sleep(Duration::from_millis(50)).await;
    };
    assert!(status.success());
}
