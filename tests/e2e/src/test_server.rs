use anyhow::{Context, Result};
use std::fs::File;
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::Duration;
use uuid::Uuid;

pub struct TestServer {
    url: String,
    process: Option<Child>,
    log_path: PathBuf,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        let port = get_random_port()?;
        let run_id = Uuid::new_v4();
        let log_path = PathBuf::from(format!(".e2e-server-{}.log", run_id));
        let log = File::create(&log_path).context("creating server log")?;

        let process = Command::new("cargo")
            .args(["run", "--package", "web", "--features", "server"])
            .env("PORT", port.to_string())
            .env("IP", "127.0.0.1")
            .env("RUST_LOG", "info")
            .stdout(Stdio::null())
            .stderr(Stdio::from(log))
            .spawn()
            .context("failed to start server")?;

        let url = format!("http://localhost:{}", port);
        let mut server = Self {
            url,
            process: Some(process),
            log_path,
        };

        if let Err(err) = wait_for_server(&server.url).await {
            let log = std::fs::read_to_string(&server.log_path).unwrap_or_default();
            server.stop();
            anyhow::bail!("{err}\n--- server log ---\n{log}");
        }

        Ok(server)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn page(&self, path: &str) -> String {
        format!("{}{}", self.url, path)
    }

    fn stop(&mut self) {
        if let Some(mut process) = self.process.take() {
            let _ = process.kill();
            let _ = process.wait();
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.stop();
        let _ = std::fs::remove_file(&self.log_path);
    }
}

fn get_random_port() -> Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    Ok(port)
}

async fn wait_for_server(url: &str) -> Result<()> {
    // Wait up to 60 seconds for server to start (compilation + startup)
    for i in 0..600 {
        if let Ok(response) = reqwest::get(url).await {
            if response.status().is_success() {
                return Ok(());
            }
        }
        tokio::time::sleep(Duration::from_millis(100)).await;

        if i > 0 && i % 50 == 0 {
            eprintln!("Still waiting for server... ({}s)", i / 10);
        }
    }
    anyhow::bail!("Server did not start in time (waited 60s)")
}
