use crate::{
    error::Result,
    gemini::ImageGenerator,
    logger,
    models::AssetTask,
    storage::AssetSaver,
};
use std::path::PathBuf;

/// How a single task ended.
#[derive(Debug)]
pub struct TaskOutcome {
    pub output: PathBuf,
    pub result: Result<PathBuf>,
}

impl TaskOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Runs asset tasks one after another. A failed task is logged and the
/// batch moves on.
pub struct BatchDriver<'a, G: ImageGenerator + ?Sized> {
    generator: &'a G,
    saver: AssetSaver,
}

impl<'a, G: ImageGenerator + ?Sized> BatchDriver<'a, G> {
    pub fn new(generator: &'a G, saver: AssetSaver) -> Self {
        Self { generator, saver }
    }

    pub async fn run_task(&self, task: &AssetTask) -> Result<PathBuf> {
        let result = self.generator.generate(task.to_request()).await?;
        log::debug!("Received {} payload for {}", result.mime_type, task.output.display());
        self.saver.save_base64(&result.data, &task.output).await
    }

    pub async fn run(&self, tasks: &[AssetTask]) -> Vec<TaskOutcome> {
        let mut outcomes = Vec::with_capacity(tasks.len());

        for task in tasks {
            let _timer = logger::timer(&task.output.display().to_string());
            let result = self.run_task(task).await;
            if let Err(e) = &result {
                log::error!("❌ Failed to generate {}: {}", task.output.display(), e);
            }
            outcomes.push(TaskOutcome {
                output: task.output.clone(),
                result,
            });
        }

        outcomes
    }
}
