/// Use cases module containing application business logic orchestration
mod handle_exposure;

pub use handle_exposure::HandleExposureUseCase;
