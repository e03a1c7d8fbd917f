use crate::{
    cli::Args,
    error::Result,
    params::ServiceParams,
    renderer::MiniJinjaRenderer,
    template::ScaffoldProcessor,
};

/// Main CLI runner that orchestrates a scaffolding run
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Renders the service skeleton and writes it below the base path
    pub fn run(self) -> Result<()> {
        let params = self.args.to_params();
        log::debug!("Service parameters: {}", serde_json::to_string(&params).unwrap_or_default());

        let engine = MiniJinjaRenderer::new();
        let processor = ScaffoldProcessor::new(&engine, &params);
        processor.scaffold(self.args.dry_run)?;

        self.report(&params);
        Ok(())
    }

    fn report(&self, params: &ServiceParams) {
        if self.args.dry_run {
            println!(
                "Dry run completed. No files were written to {}.",
                params.service_root().display()
            );
        } else {
            println!(
                "Service skeleton generated successfully in {}.",
                params.service_root().display()
            );
        }
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}
