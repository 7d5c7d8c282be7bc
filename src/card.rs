use std::ffi::OsString;
use std::fs::{self, File};
use std::io::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use crate::error::{Error, Result};
use crate::lnmpln::Waypoint;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CardRecord {
    pub position: u8,
    pub latitude: String,
    pub longitude: String,
    pub ident: String,
    /// Index of the source waypoint in the route.
    pub waypoint: usize,
}

impl CardRecord {
    pub fn new(position: u8, waypoint: usize, source: &Waypoint) -> Self {
        let (latitude, longitude) = source.latlon.to_card();
        CardRecord {
            position,
            latitude,
            longitude,
            ident: source.ident.clone(),
            waypoint,
        }
    }
}

/// One card file worth of records.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Page {
    pub name: String,
    pub records: Vec<CardRecord>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CardKind {
    /// Waypoint data card (AWC)
    Primary,
    /// DME card, VOR waypoints only (ADC)
    Auxiliary,
}

impl From<CardKind> for &str {
    fn from(x: CardKind) -> &'static str {
        match x {
            CardKind::Primary => "AWC",
            CardKind::Auxiliary => "ADC",
        }
    }
}

impl CardKind {
    fn header(self) -> &'static [&'static str] {
        match self {
            CardKind::Primary => &[";", "; Carousel IV-A INS", "; ADEU Waypoints Data Card", ";"],
            CardKind::Auxiliary => &[";", "; Carousel IV-A ADEU DME Card File", ";"],
        }
    }
}

static FOOTER: &[&str] = &[";", "; End Of File", ";"];

pub fn render(page: &Page, kind: CardKind) -> Vec<String> {
    let header = kind.header().iter().map(|l| l.to_string());
    let records = page.records.iter().map(|r| {
        format!("{} {} {} ; {}", r.position, r.latitude, r.longitude, r.ident)
    });
    let footer = FOOTER.iter().map(|l| l.to_string());

    header.chain(records).chain(footer).collect()
}

pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let mut text = String::new();
    for line in lines {
        text += line;
        text += "\n";
    }

    let output_error = |source: std::io::Error| Error::Output {
        path: path.display().to_string(),
        source,
    };
    let mut output = File::create(path).map_err(output_error)?;
    output.write_all(text.as_bytes()).map_err(output_error)?;
    info!(path = %path.display(), lines = lines.len(), "wrote file");
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

fn discard<P: AsRef<Path>>(paths: &[P]) {
    for path in paths {
        if let Err(e) = fs::remove_file(path) {
            warn!(path = %path.as_ref().display(), error = %e, "could not clean up");
        }
    }
}

/// Writes one `<name>.AWC`/`<name>.ADC` file per page into `dir`.
///
/// Every card is first written to `<name>.<EXT>.tmp` and only renamed into
/// place once the whole family is on disk. If any step fails the family is
/// removed again, so either every card of the family exists or none does.
pub fn write_cards(dir: &Path, pages: &[Page], kind: CardKind) -> Result<usize> {
    let extension: &str = kind.into();
    let rendered: Vec<_> = pages
        .iter()
        .map(|page| (dir.join(format!("{}.{}", page.name, extension)), render(page, kind)))
        .collect();

    let mut staged = Vec::with_capacity(rendered.len());
    for (path, lines) in &rendered {
        let staging = staging_path(path);
        if let Err(e) = write_lines(&staging, lines) {
            discard(&staged);
            discard(&[&staging]);
            return Err(e);
        }
        staged.push(staging);
    }

    for (done, (staging, (path, _))) in staged.iter().zip(&rendered).enumerate() {
        if let Err(source) = fs::rename(staging, path) {
            let placed: Vec<_> = rendered[..done].iter().map(|(path, _)| path).collect();
            discard(&placed);
            discard(&staged[done..]);
            return Err(Error::Output {
                path: path.display().to_string(),
                source,
            });
        }
    }

    Ok(rendered.len())
}
