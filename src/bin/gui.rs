fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = mandelbrot_explorer::ExplorerConfig::from_env()?;

    mandelbrot_explorer::run_gui(&config)
}
