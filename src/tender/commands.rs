// region:    --- Imports
use crate::error::AppError;
use crate::store::TenderStore;
use crate::tender::validation::TenderForm;
use tracing::info;
// endregion: --- Imports

/// 공고 등록: 검증 후 저장, 새 공고 id 반환
pub async fn handle_create_tender(
    form: TenderForm,
    store: &dyn TenderStore,
) -> Result<i64, AppError> {
    let tender = form.validate()?;
    info!(
        "{:<12} --> 공고 등록: {} ({} ~ {})",
        "Command", tender.name, tender.start_datetime, tender.end_datetime
    );
    Ok(store.insert_tender(&tender).await?)
}
