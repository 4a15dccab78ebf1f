use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use crate::http_client::{self, RetryConfig};

use super::{TileDiskCache, TileError, TileKey, TileUrlTemplate};

const TILE_RETRY: RetryConfig = RetryConfig {
    max_attempts: 3,
    base_delay: Duration::from_millis(250),
    max_delay: Duration::from_secs(2),
};

/// One tile to load from `template`.
#[derive(Clone, Debug)]
pub struct TileRequest {
    pub key: TileKey,
    pub template: Arc<TileUrlTemplate>,
}

/// Decoded tile pixels, ready for texture upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileImage {
    pub size: [usize; 2],
    pub rgba: Vec<u8>,
}

#[derive(Debug)]
pub struct TileResult {
    pub key: TileKey,
    /// Cache namespace of the template the tile was loaded from.
    pub namespace: String,
    pub result: Result<TileImage, TileError>,
}

/// Handle to the tile download pool. Dropping it stops the workers once
/// their queue drains.
pub struct TileFetcher {
    tx: Sender<TileRequest>,
    workers: usize,
}

impl TileFetcher {
    /// Spawn `workers` download threads sharing one request queue.
    pub fn spawn(
        workers: usize,
        max_bytes: usize,
        disk: Option<TileDiskCache>,
    ) -> (Self, Receiver<TileResult>) {
        let (tx, rx) = std::sync::mpsc::channel::<TileRequest>();
        let (result_tx, result_rx) = std::sync::mpsc::channel::<TileResult>();
        let queue = Arc::new(Mutex::new(rx));
        let workers = workers.max(1);
        for index in 0..workers {
            let queue = Arc::clone(&queue);
            let result_tx = result_tx.clone();
            let disk = disk.clone();
            let spawned = thread::Builder::new()
                .name(format!("tile-worker-{index}"))
                .spawn(move || run_worker(&queue, &result_tx, max_bytes, disk.as_ref()));
            if let Err(err) = spawned {
                tracing::warn!("Failed to spawn tile worker {index}: {err}");
            }
        }
        (Self { tx, workers }, result_rx)
    }

    /// Queue a request. Returns false when every worker has exited.
    pub fn request(&self, request: TileRequest) -> bool {
        self.tx.send(request).is_ok()
    }

    pub fn workers(&self) -> usize {
        self.workers
    }
}

fn run_worker(
    queue: &Mutex<Receiver<TileRequest>>,
    results: &Sender<TileResult>,
    max_bytes: usize,
    disk: Option<&TileDiskCache>,
) {
    loop {
        let request = {
            let Ok(guard) = queue.lock() else {
                return;
            };
            match guard.recv() {
                Ok(request) => request,
                Err(_) => return,
            }
        };
        let result = load_tile(&request, max_bytes, disk);
        if let Err(err) = &result {
            tracing::debug!("Tile {} failed: {err}", request.key);
        }
        let message = TileResult {
            key: request.key,
            namespace: request.template.cache_namespace().to_string(),
            result,
        };
        if results.send(message).is_err() {
            return;
        }
    }
}

fn load_tile(
    request: &TileRequest,
    max_bytes: usize,
    disk: Option<&TileDiskCache>,
) -> Result<TileImage, TileError> {
    let namespace = request.template.cache_namespace();
    if let Some(bytes) = disk.and_then(|cache| cache.load(namespace, request.key)) {
        match decode_tile(request.key, &bytes) {
            Ok(image) => return Ok(image),
            Err(err) => tracing::debug!("Ignoring unreadable cached tile: {err}"),
        }
    }
    let bytes = fetch_tile(&request.template, request.key, max_bytes)?;
    let image = decode_tile(request.key, &bytes)?;
    if let Some(cache) = disk {
        if let Err(err) = cache.store(namespace, request.key, &bytes) {
            tracing::warn!("{err}");
        }
    }
    Ok(image)
}

/// Download raw tile bytes, retrying transport failures and server errors.
pub fn fetch_tile(
    template: &TileUrlTemplate,
    key: TileKey,
    max_bytes: usize,
) -> Result<Vec<u8>, TileError> {
    let url = template.render(key);
    let response = http_client::retry_with_backoff(
        TILE_RETRY,
        || http_client::agent().get(&url).call(),
        http_client::is_transient,
    )
    .map_err(|source| TileError::Fetch {
        url: url.clone(),
        source: Box::new(source),
    })?;
    http_client::read_response_bytes(response, max_bytes)
        .map_err(|source| TileError::Body { url, source })
}

pub fn decode_tile(key: TileKey, bytes: &[u8]) -> Result<TileImage, TileError> {
    let image = image::load_from_memory(bytes)
        .map_err(|source| TileError::Decode { key, source })?
        .to_rgba8();
    let size = [image.width() as usize, image.height() as usize];
    Ok(TileImage {
        size,
        rgba: image.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read, Write};
    use std::net::TcpListener;

    fn png_bytes() -> Vec<u8> {
        let image = image::RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn serve_tile(body: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf);
                let header = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: image/png\r\nContent-Length: {}\r\n\r\n",
                    body.len()
                );
                let _ = stream.write_all(header.as_bytes());
                let _ = stream.write_all(&body);
            }
        });
        format!("http://{addr}/{{z}}/{{x}}/{{y}}.png")
    }

    #[test]
    fn decodes_png_into_rgba() {
        let image = decode_tile(TileKey::new(0, 0, 0), &png_bytes()).unwrap();
        assert_eq!(image.size, [2, 2]);
        assert_eq!(image.rgba.len(), 16);
        assert_eq!(&image.rgba[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = decode_tile(TileKey::new(1, 1, 1), b"not an image").unwrap_err();
        assert!(matches!(err, TileError::Decode { .. }));
    }

    #[test]
    fn worker_pool_fetches_and_caches_tiles() {
        let template = Arc::new(TileUrlTemplate::new(&serve_tile(png_bytes())).unwrap());
        let dir = tempfile::tempdir().unwrap();
        let cache = TileDiskCache::new(dir.path());
        let (fetcher, results) = TileFetcher::spawn(2, 1 << 20, Some(cache.clone()));
        let key = TileKey::new(3, 2, 5);
        assert!(fetcher.request(TileRequest {
            key,
            template: Arc::clone(&template),
        }));
        let result = results.recv_timeout(Duration::from_secs(10)).unwrap();
        assert_eq!(result.key, key);
        assert_eq!(result.namespace, template.cache_namespace());
        assert_eq!(result.result.unwrap().size, [2, 2]);
        assert!(cache.load(template.cache_namespace(), key).is_some());
    }

    #[test]
    fn cached_tiles_skip_the_network() {
        let template =
            Arc::new(TileUrlTemplate::new("http://127.0.0.1:9/{z}/{x}/{y}.png").unwrap());
        let dir = tempfile::tempdir().unwrap();
        let cache = TileDiskCache::new(dir.path());
        let key = TileKey::new(2, 1, 1);
        cache
            .store(template.cache_namespace(), key, &png_bytes())
            .unwrap();
        let (fetcher, results) = TileFetcher::spawn(1, 1 << 20, Some(cache));
        fetcher.request(TileRequest { key, template });
        let result = results.recv_timeout(Duration::from_secs(10)).unwrap();
        assert!(result.result.is_ok());
    }
}
