use std::sync::Arc;

use feira::repository::StreetMarketRepository;
use feira::service::{StreetMarketEraser, StreetMarketReader, StreetMarketWriter};

pub type Writer = StreetMarketWriter<StreetMarketRepository>;
pub type Reader = StreetMarketReader<StreetMarketRepository>;
pub type Eraser = StreetMarketEraser<StreetMarketRepository>;

#[derive(Clone)]
pub struct AppState {
    pub writer: Arc<Writer>,
    pub reader: Arc<Reader>,
    pub eraser: Arc<Eraser>,
}

impl AppState {
    pub fn new(repo: StreetMarketRepository) -> Self {
        Self {
            writer: Arc::new(StreetMarketWriter::new(repo.clone())),
            reader: Arc::new(StreetMarketReader::new(repo.clone())),
            eraser: Arc::new(StreetMarketEraser::new(repo)),
        }
    }
}
