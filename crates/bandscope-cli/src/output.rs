//! Line rendering for each output format.

use anyhow::Context;
use bandscope_core::{Band, BandResolver};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Tab-separated, human oriented.
    Text,
    /// One JSON object per line.
    Json,
    /// The string-sentinel values older consumers parse.
    Legacy,
}

#[derive(Serialize)]
struct FrequencyReport {
    nrarfcn: u32,
    frequency_mhz: Option<f64>,
}

fn unsigned(channel: i32) -> anyhow::Result<u32> {
    u32::try_from(channel).with_context(|| format!("channel {channel} is negative"))
}

fn band_or_dash(band: Option<Band>) -> String {
    band.map_or_else(|| "-".to_string(), |b| b.to_string())
}

fn mhz_or_dash(mhz: Option<f64>) -> String {
    mhz.map_or_else(|| "-".to_string(), |f| format!("{f:.2} MHz"))
}

pub fn lte_line(resolver: &BandResolver, earfcn: i32, format: Format) -> anyhow::Result<String> {
    Ok(match format {
        Format::Legacy => resolver.legacy().resolve_lte_band(earfcn),
        Format::Json => serde_json::to_string(&resolver.describe_lte(unsigned(earfcn)?))?,
        Format::Text => {
            let report = resolver.describe_lte(unsigned(earfcn)?);
            format!("{}\t{}", report.earfcn, band_or_dash(report.band))
        }
    })
}

pub fn nr_line(
    resolver: &BandResolver,
    nrarfcn: i32,
    all: bool,
    format: Format,
) -> anyhow::Result<String> {
    Ok(match format {
        Format::Legacy if all => format!("{:?}", resolver.legacy().resolve_nr_band_all(nrarfcn)),
        Format::Legacy => resolver.legacy().resolve_nr_band(nrarfcn),
        Format::Json => serde_json::to_string(&resolver.describe_nr(unsigned(nrarfcn)?))?,
        Format::Text => {
            let report = resolver.describe_nr(unsigned(nrarfcn)?);
            let bands = if all && !report.bands.is_empty() {
                report
                    .bands
                    .iter()
                    .map(Band::to_string)
                    .collect::<Vec<_>>()
                    .join(",")
            } else {
                band_or_dash(report.band)
            };
            let spectrum = report
                .spectrum
                .map_or_else(|| "-".to_string(), |s| s.to_string());
            format!(
                "{}\t{}\t{}\t{}",
                report.nrarfcn,
                bands,
                mhz_or_dash(report.frequency_mhz),
                spectrum
            )
        }
    })
}

pub fn freq_line(resolver: &BandResolver, nrarfcn: i32, format: Format) -> anyhow::Result<String> {
    Ok(match format {
        Format::Legacy => format!("{:.2}", resolver.legacy().channel_to_frequency_mhz(nrarfcn)),
        Format::Json => {
            let nrarfcn = unsigned(nrarfcn)?;
            serde_json::to_string(&FrequencyReport {
                nrarfcn,
                frequency_mhz: resolver.frequency_mhz(nrarfcn),
            })?
        }
        Format::Text => {
            let ch = unsigned(nrarfcn)?;
            format!("{}\t{}", ch, mhz_or_dash(resolver.frequency_mhz(ch)))
        }
    })
}
