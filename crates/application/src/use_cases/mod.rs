pub mod cleanup;

pub use cleanup::CleanupDirectoryUseCase;
