use catalog_demo::config::DemoConfig;
use catalog_infra::read_model::InMemoryProductRepository;

fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let config = DemoConfig::from_env()?;
    let mut repo = InMemoryProductRepository::new();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    catalog_demo::run(&config, &mut repo, &mut out)
}
