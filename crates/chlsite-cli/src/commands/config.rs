use crate::cli::ConfigArgs;
use crate::config::default_template;
use crate::error::Result;
use tracing::info;

pub fn run(args: ConfigArgs) -> Result<()> {
    let template = default_template();
    match args.output {
        Some(path) => {
            std::fs::write(&path, template)?;
            info!("Configuration template written to {:?}", &path);
            println!("✓ Configuration template written to: {}", path.display());
        }
        None => print!("{template}"),
    }
    Ok(())
}
