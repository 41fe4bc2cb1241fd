//! Street-market routes.
//!
//! JSON field names follow the municipal open-data headers (`nome_feira`,
//! `registro`, …) while the domain uses the column names.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use serde::{Deserialize, Serialize};

use feira::domain::{
    MarketId, StreetMarket, StreetMarketCreateInput, StreetMarketFilter, StreetMarketPatch,
};
use feira::error::MarketError;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateBody {
    #[serde(default)]
    long: f64,
    #[serde(default)]
    lat: f64,
    #[serde(default, rename = "setcens")]
    sectcens: String,
    #[serde(default, rename = "areap")]
    area: String,
    #[serde(default, rename = "coddist")]
    iddist: String,
    #[serde(default, rename = "distrito")]
    district: String,
    #[serde(default, rename = "codsubpref")]
    idsubth: String,
    #[serde(default, rename = "subpref")]
    subtownhall: String,
    #[serde(default, rename = "regiao5")]
    region5: String,
    #[serde(default, rename = "regiao8")]
    region8: String,
    #[serde(default, rename = "nome_feira")]
    name: String,
    #[serde(default, rename = "registro")]
    register: String,
    #[serde(default, rename = "logradouro")]
    street: String,
    #[serde(default, rename = "numero")]
    number: i32,
    #[serde(default, rename = "bairro")]
    neighborhood: String,
    #[serde(default, rename = "referencia")]
    addrextrainfo: String,
}

impl From<CreateBody> for StreetMarketCreateInput {
    fn from(b: CreateBody) -> Self {
        StreetMarketCreateInput {
            long: b.long,
            lat: b.lat,
            sectcens: b.sectcens,
            area: b.area,
            iddist: b.iddist,
            district: b.district,
            idsubth: b.idsubth,
            subtownhall: b.subtownhall,
            region5: b.region5,
            region8: b.region8,
            name: b.name,
            register: b.register,
            street: b.street,
            number: b.number,
            neighborhood: b.neighborhood,
            addrextrainfo: b.addrextrainfo,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct EditBody {
    long: Option<f64>,
    lat: Option<f64>,
    #[serde(rename = "setcens")]
    sectcens: Option<String>,
    #[serde(rename = "areap")]
    area: Option<String>,
    #[serde(rename = "coddist")]
    iddist: Option<String>,
    #[serde(rename = "distrito")]
    district: Option<String>,
    #[serde(rename = "codsubpref")]
    idsubth: Option<String>,
    #[serde(rename = "subpref")]
    subtownhall: Option<String>,
    #[serde(rename = "regiao5")]
    region5: Option<String>,
    #[serde(rename = "regiao8")]
    region8: Option<String>,
    #[serde(rename = "nome_feira")]
    name: Option<String>,
    #[serde(rename = "registro")]
    register: Option<String>,
    #[serde(rename = "logradouro")]
    street: Option<String>,
    #[serde(rename = "numero")]
    number: Option<i32>,
    #[serde(rename = "bairro")]
    neighborhood: Option<String>,
    #[serde(rename = "referencia")]
    addrextrainfo: Option<String>,
}

impl From<EditBody> for StreetMarketPatch {
    fn from(b: EditBody) -> Self {
        StreetMarketPatch {
            long: b.long,
            lat: b.lat,
            sectcens: b.sectcens,
            area: b.area,
            iddist: b.iddist,
            district: b.district,
            idsubth: b.idsubth,
            subtownhall: b.subtownhall,
            region5: b.region5,
            region8: b.region8,
            name: b.name,
            register: b.register,
            street: b.street,
            number: b.number,
            neighborhood: b.neighborhood,
            addrextrainfo: b.addrextrainfo,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StreetMarketResponse {
    id: String,
    long: f64,
    lat: f64,
    setcens: String,
    areap: String,
    coddist: String,
    distrito: String,
    codsubpref: String,
    subpref: String,
    regiao5: String,
    regiao8: String,
    nome_feira: String,
    registro: String,
    logradouro: String,
    numero: i32,
    bairro: String,
    referencia: String,
}

impl From<StreetMarket> for StreetMarketResponse {
    fn from(sm: StreetMarket) -> Self {
        StreetMarketResponse {
            id: sm.id,
            long: sm.long,
            lat: sm.lat,
            setcens: sm.sectcens,
            areap: sm.area,
            coddist: sm.iddist,
            distrito: sm.district,
            codsubpref: sm.idsubth,
            subpref: sm.subtownhall,
            regiao5: sm.region5,
            regiao8: sm.region8,
            nome_feira: sm.name,
            registro: sm.register,
            logradouro: sm.street,
            numero: sm.number,
            bairro: sm.neighborhood,
            referencia: sm.addrextrainfo,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    page: Option<String>,
    district: Option<String>,
    region5: Option<String>,
    name: Option<String>,
    neighborhood: Option<String>,
}

impl ListParams {
    fn page(&self) -> Result<i64, ApiError> {
        match self.page.as_deref() {
            None | Some("") => Ok(0),
            Some(raw) => raw
                .parse()
                .map_err(|_| MarketError::validation("page must be an integer").into()),
        }
    }

    fn filter(&self) -> StreetMarketFilter {
        StreetMarketFilter {
            district: non_empty(&self.district),
            region5: non_empty(&self.region5),
            name: non_empty(&self.name),
            neighborhood: non_empty(&self.neighborhood),
        }
    }
}

// `?district=` arrives as an empty string; treat it as no constraint.
fn non_empty(v: &Option<String>) -> Option<String> {
    v.as_deref().filter(|s| !s.is_empty()).map(str::to_owned)
}

#[derive(Serialize)]
pub struct ListResponse {
    data: Vec<StreetMarketResponse>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse>, ApiError> {
    let page = params.page()?;
    let markets = state.reader.list(page, &params.filter()).await?;

    Ok(Json(ListResponse {
        data: markets.into_iter().map(Into::into).collect(),
    }))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateBody>,
) -> Result<(StatusCode, HeaderMap), ApiError> {
    let id = state.writer.create(body.into()).await?;

    let mut headers = HeaderMap::new();
    if let Ok(location) = HeaderValue::from_str(&format!("/street_market/{id}")) {
        headers.insert(header::LOCATION, location);
    }
    Ok((StatusCode::CREATED, headers))
}

pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<EditBody>,
) -> Result<StatusCode, ApiError> {
    let id = MarketId::parse(id)?;
    state.writer.edit(&id, &body.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = MarketId::parse(id)?;
    state.eraser.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
