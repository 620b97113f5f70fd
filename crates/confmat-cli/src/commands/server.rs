use std::path::PathBuf;

use confmat_server::ServerConfig;

pub fn run(host: &str, port: u16, images_dir: &str) {
    let config = ServerConfig {
        images_dir: PathBuf::from(images_dir),
    };

    let base = format!("http://{host}:{port}");

    println!("confmat server v{}", confmat_core::VERSION);
    println!("   {base}");
    println!();
    println!("   Endpoints:");
    println!("     GET /                    Calculator form");
    println!("     GET /calculate           Form with results and heatmap");
    println!("     GET /api/v1/calculate    Counts, rates and grid as JSON");
    println!("     GET /api/v1/matrix.svg   Heatmap as SVG");
    println!("     GET /images/<name>       Static images from {images_dir}");
    println!("     GET /health              Health check");
    println!();
    println!("   Query params: tp, fn, tn, fp (non-negative integers, default 0)");
    println!();
    println!("   Examples:");
    println!("     curl '{base}/api/v1/calculate?tp=50&fn=10&tn=30&fp=5'");
    println!("     curl '{base}/api/v1/matrix.svg?tp=50&fn=10&tn=30&fp=5' > matrix.svg");
    println!();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to start async runtime: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = rt.block_on(confmat_server::run_server(config, host, port)) {
        eprintln!("Server error on {base}: {e}");
        std::process::exit(1);
    }
}
