mod cleanup_directory;

pub use cleanup_directory::CleanupDirectoryUseCase;
