//! CSV import of the municipal street-market dataset.
//!
//! Walks every file under `FEIRA_DATA_PATH`, maps dataset columns onto
//! create inputs and inserts them through the writer service. A bad row is
//! logged and skipped; it never aborts the run.

use std::path::Path;

use feira::domain::StreetMarketCreateInput;
use feira::repository::StreetMarketRepository;
use feira::service::StreetMarketWriter;

// Dataset column layout: ID,LONG,LAT,SETCENS,AREAP,CODDIST,DISTRITO,
// CODSUBPREF,SUBPREF,REGIAO5,REGIAO8,NOME_FEIRA,REGISTRO,LOGRADOURO,
// NUMERO,BAIRRO,REFERENCIA
const COL_LONG: usize = 1;
const COL_LAT: usize = 2;
const COL_SETCENS: usize = 3;
const COL_AREAP: usize = 4;
const COL_CODDIST: usize = 5;
const COL_DISTRITO: usize = 6;
const COL_CODSUBPREF: usize = 7;
const COL_SUBPREF: usize = 8;
const COL_REGIAO5: usize = 9;
const COL_REGIAO8: usize = 10;
const COL_NOME_FEIRA: usize = 11;
const COL_REGISTRO: usize = 12;
const COL_LOGRADOURO: usize = 13;
const COL_NUMERO: usize = 14;
const COL_BAIRRO: usize = 15;
const COL_REFERENCIA: usize = 16;

fn field(record: &csv::StringRecord, idx: usize) -> String {
    record.get(idx).unwrap_or_default().trim().to_string()
}

/// Map one dataset row onto a create input. Returns the reason when the row
/// cannot be represented (short row, unparsable coordinate or number).
fn parse_row(record: &csv::StringRecord) -> Result<StreetMarketCreateInput, String> {
    if record.len() <= COL_REFERENCIA {
        return Err(format!("row has only {} columns", record.len()));
    }

    let long: f64 = field(record, COL_LONG)
        .parse()
        .map_err(|_| format!("bad longitude {:?}", field(record, COL_LONG)))?;
    let lat: f64 = field(record, COL_LAT)
        .parse()
        .map_err(|_| format!("bad latitude {:?}", field(record, COL_LAT)))?;
    // "S/N" and friends in NUMERO mean "no street number".
    let number: i32 = field(record, COL_NUMERO).parse().unwrap_or(0);

    Ok(StreetMarketCreateInput {
        long,
        lat,
        sectcens: field(record, COL_SETCENS),
        area: field(record, COL_AREAP),
        iddist: field(record, COL_CODDIST),
        district: field(record, COL_DISTRITO),
        idsubth: field(record, COL_CODSUBPREF),
        subtownhall: field(record, COL_SUBPREF),
        region5: field(record, COL_REGIAO5),
        region8: field(record, COL_REGIAO8),
        name: field(record, COL_NOME_FEIRA),
        register: field(record, COL_REGISTRO),
        street: field(record, COL_LOGRADOURO),
        number,
        neighborhood: field(record, COL_BAIRRO),
        addrextrainfo: field(record, COL_REFERENCIA),
    })
}

async fn import_file(
    writer: &StreetMarketWriter<StreetMarketRepository>,
    path: &Path,
) -> Result<(u64, u64), csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut imported = 0u64;
    let mut skipped = 0u64;

    for record in reader.records() {
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable row");
                skipped += 1;
                continue;
            }
        };

        let input = match parse_row(&record) {
            Ok(input) => input,
            Err(reason) => {
                tracing::warn!(%reason, "skipping row");
                skipped += 1;
                continue;
            }
        };

        match writer.create(input).await {
            Ok(id) => {
                tracing::debug!(%id, "imported street market");
                imported += 1;
            }
            Err(e) => {
                tracing::warn!(error = %e, "skipping row that failed to insert");
                skipped += 1;
            }
        }
    }

    Ok((imported, skipped))
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
        eprintln!("DATABASE_URL is not set");
        std::process::exit(1);
    });
    let data_path = std::env::var("FEIRA_DATA_PATH").unwrap_or_else(|_| {
        eprintln!("FEIRA_DATA_PATH is not set");
        std::process::exit(1);
    });

    let pool = feira::create_pool(&database_url).unwrap_or_else(|e| {
        eprintln!("failed to configure database pool: {e}");
        std::process::exit(1);
    });
    let writer = StreetMarketWriter::new(StreetMarketRepository::new(pool));

    let entries = std::fs::read_dir(&data_path).unwrap_or_else(|e| {
        eprintln!("failed to read {data_path}: {e}");
        std::process::exit(1);
    });

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        tracing::info!(file = %path.display(), "processing file");
        match import_file(&writer, &path).await {
            Ok((imported, skipped)) => {
                tracing::info!(file = %path.display(), imported, skipped, "file done");
            }
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "failed to process file");
            }
        }
    }
}
