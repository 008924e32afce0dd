pub mod cleaner;
pub mod cleaner_orchestrator;
pub mod targets;
pub mod uninstaller;
