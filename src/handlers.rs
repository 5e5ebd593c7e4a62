// region:    --- Imports
use crate::bidding::commands::{handle_place_bid, PlaceBidCommand};
use crate::error::AppError;
use crate::state::AppState;
use crate::tender::commands::handle_create_tender;
use crate::tender::validation::{BidForm, TenderForm};
use crate::views::{HomeView, TenderDetailView, TenderFormView, TenderListView};
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::{Form, Json};
use tracing::info;

// endregion: --- Imports

// region:    --- Page Handlers

/// 메인 화면
pub async fn handle_home() -> Json<HomeView> {
    Json(HomeView::default())
}

/// 공고 등록 폼
pub async fn handle_add_tender_form() -> Json<TenderFormView> {
    Json(TenderFormView::default())
}

// endregion: --- Page Handlers

// region:    --- Command Handlers

/// 공고 등록 요청 처리
pub async fn handle_add_tender(
    State(state): State<AppState>,
    Form(form): Form<TenderForm>,
) -> Result<Redirect, AppError> {
    info!("{:<12} --> 공고 등록 요청: {:?}", "Handler", form);
    handle_create_tender(form, state.store.as_ref()).await?;
    Ok(Redirect::to("/tenders"))
}

/// 입찰 요청 처리
pub async fn handle_bid(
    State(state): State<AppState>,
    tender_id: Result<Path<i64>, PathRejection>,
    Form(form): Form<BidForm>,
) -> Result<Redirect, AppError> {
    let tender_id = tender_id_from(tender_id)?;
    info!("{:<12} --> 입찰 요청 tender id: {}", "Handler", tender_id);
    let cmd = PlaceBidCommand::new(tender_id, form.validate()?);
    handle_place_bid(cmd, state.store.as_ref(), &state.policy, state.now()).await?;
    Ok(Redirect::to(&format!("/tender/{}", tender_id)))
}

// endregion: --- Command Handlers

// region:    --- Query Handlers

/// 진행 중 공고 목록
pub async fn handle_get_current_tenders(
    State(state): State<AppState>,
) -> Result<Json<TenderListView>, AppError> {
    info!("{:<12} --> 진행 중 공고 목록 조회", "Handler");
    let cutoff = state.policy.listing_cutoff(state.now());
    let tenders = state.store.current_tenders(cutoff).await?;
    Ok(Json(TenderListView {
        title: "Current Tenders",
        tenders,
    }))
}

/// 종료 공고 목록
pub async fn handle_get_past_tenders(
    State(state): State<AppState>,
) -> Result<Json<TenderListView>, AppError> {
    info!("{:<12} --> 종료 공고 목록 조회", "Handler");
    let cutoff = state.policy.listing_cutoff(state.now());
    let tenders = state.store.past_tenders(cutoff).await?;
    Ok(Json(TenderListView {
        title: "Past Tenders",
        tenders,
    }))
}

/// 공고 상세 (진행 중이면 유효 입찰, 종료되었으면 낙찰자)
pub async fn handle_get_tender(
    State(state): State<AppState>,
    tender_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<TenderDetailView>, AppError> {
    let tender_id = tender_id_from(tender_id)?;
    info!("{:<12} --> 공고 상세 조회 id: {}", "Handler", tender_id);
    let tender = state
        .store
        .tender(tender_id)
        .await?
        .ok_or(AppError::NotFound)?;
    let bids = state.store.bids_for(tender.id).await?;
    let standing = state.policy.evaluate(&tender, bids, state.now());
    Ok(Json(TenderDetailView::new(tender, standing)))
}

/// 숫자가 아닌 id는 존재하지 않는 공고로 취급
fn tender_id_from(path: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    match path {
        Ok(Path(tender_id)) => Ok(tender_id),
        Err(rejection) => {
            info!("{:<12} --> 잘못된 공고 id: {}", "Handler", rejection);
            Err(AppError::NotFound)
        }
    }
}

// endregion: --- Query Handlers
