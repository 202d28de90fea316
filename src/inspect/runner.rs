// Dataset inspection runner.
// Walks a directory of ARC task files, clusters every training input and
// collects a per-task report for printing.

use std::path::PathBuf;
use std::time::Instant;

use log::info;

use crate::perception::grid::{load_tasks, task_files};
use super::sample::{inspect_task, TaskReport};

#[derive(Debug, Clone)]
pub struct InspectConfig {
    pub data_dir: PathBuf,
    /// Only inspect the task whose file stem matches.
    pub task: Option<String>,
    pub max_tasks: Option<usize>,
    pub count_diagonal: bool,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            task: None,
            max_tasks: None,
            count_diagonal: false,
        }
    }
}

#[derive(Debug)]
pub struct InspectionReport {
    pub total_tasks: usize,
    pub skipped: usize,
    pub total_samples: usize,
    pub total_patterns: usize,
    pub elapsed_ms: u64,
    pub per_task: Vec<TaskReport>,
}

pub fn run_inspection(config: &InspectConfig) -> anyhow::Result<InspectionReport> {
    let mut files = task_files(&config.data_dir)?;
    if let Some(id) = &config.task {
        files.retain(|p| p.file_stem().and_then(|s| s.to_str()) == Some(id.as_str()));
        if files.is_empty() {
            anyhow::bail!("no task {} in {}", id, config.data_dir.display());
        }
    }
    if let Some(max) = config.max_tasks {
        files.truncate(max);
    }
    info!(
        "inspecting {} tasks in {} ({}-connectivity)",
        files.len(),
        config.data_dir.display(),
        if config.count_diagonal { 8 } else { 4 }
    );

    let total_start = Instant::now();
    let (tasks, skipped) = load_tasks(&files);
    let per_task: Vec<TaskReport> = tasks
        .iter()
        .map(|task| inspect_task(task, config.count_diagonal))
        .collect();

    Ok(InspectionReport {
        total_tasks: per_task.len(),
        skipped,
        total_samples: per_task.iter().map(|t| t.samples).sum(),
        total_patterns: per_task.iter().map(|t| t.patterns).sum(),
        elapsed_ms: total_start.elapsed().as_millis() as u64,
        per_task,
    })
}

impl InspectionReport {
    pub fn print_summary(&self) {
        println!("=== ARC Pattern Inspection ===");
        println!("Tasks: {} | Skipped: {} | Samples: {} | Patterns: {}",
            self.total_tasks, self.skipped, self.total_samples, self.total_patterns);
        println!("Time: {}ms", self.elapsed_ms);
        for t in &self.per_task {
            let sizes: Vec<String> = t.sizes.iter().map(|(r, c)| format!("{}x{}", r, c)).collect();
            println!("  {} | samples={} sizes={} patterns={} colors={} palette={:?} largest={} time={}ms",
                t.task_id, t.samples, sizes.join(","), t.patterns, t.colors, t.palette,
                t.largest_pattern, t.elapsed_ms);
        }
    }

    pub fn print_detail(&self) {
        for t in &self.per_task {
            println!("--- task {} ---", t.task_id);
            for text in &t.rendered {
                print!("{}", text);
            }
        }
        self.print_summary();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TASK: &str = r#"{"train": [{"input": [[1, 1], [0, 1]], "output": [[1]]}]}"#;

    fn dataset(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("arc-patterns-run-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("one.json"), TASK).unwrap();
        std::fs::write(dir.join("two.json"), TASK).unwrap();
        std::fs::write(dir.join("zzz.json"), "[1, 2").unwrap();
        dir
    }

    #[test]
    fn inspects_all_tasks() {
        let dir = dataset("all");
        let config = InspectConfig { data_dir: dir.clone(), ..Default::default() };
        let report = run_inspection(&config).unwrap();
        assert_eq!(report.total_tasks, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.total_samples, 2);
        assert_eq!(report.total_patterns, 4);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn task_filter_and_limit() {
        let dir = dataset("filter");
        let config = InspectConfig { data_dir: dir.clone(), task: Some("two".into()), ..Default::default() };
        let report = run_inspection(&config).unwrap();
        assert_eq!(report.per_task.len(), 1);
        assert_eq!(report.per_task[0].task_id, "two");

        let config = InspectConfig { data_dir: dir.clone(), max_tasks: Some(1), ..Default::default() };
        assert_eq!(run_inspection(&config).unwrap().per_task[0].task_id, "one");

        let config = InspectConfig { data_dir: dir.clone(), task: Some("nope".into()), ..Default::default() };
        assert!(run_inspection(&config).is_err());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
