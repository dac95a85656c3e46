//! Format texte des presets : CSV avec ligne d'en-tête `Name,Stream URL`.
//!
//! Les colonnes sont retrouvées par leur nom d'en-tête ; une colonne absente
//! ou une ligne trop courte donne une chaîne vide.

use std::io;

use crate::{Result, StreamEntry};

pub const NAME_COLUMN: &str = "Name";
pub const URL_COLUMN: &str = "Stream URL";

/// Lit les entrées d'un preset, dans l'ordre du fichier
pub fn read_entries<R: io::Read>(reader: R) -> Result<Vec<StreamEntry>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let name_idx = headers.iter().position(|h| h == NAME_COLUMN);
    let url_idx = headers.iter().position(|h| h == URL_COLUMN);

    let mut entries = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let field = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .unwrap_or_default()
                .to_string()
        };
        entries.push(StreamEntry {
            name: field(name_idx),
            url: field(url_idx),
        });
    }

    Ok(entries)
}

/// Écrit l'en-tête puis une ligne par entrée
pub fn write_entries<W: io::Write>(writer: W, entries: &[StreamEntry]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record([NAME_COLUMN, URL_COLUMN])?;
    for entry in entries {
        wtr.write_record([entry.name.as_str(), entry.url.as_str()])?;
    }
    wtr.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_string(entries: &[StreamEntry]) -> String {
        let mut buf = Vec::new();
        write_entries(&mut buf, entries).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn writes_header_then_rows() {
        let text = to_string(&[
            StreamEntry::new("Cam 1", "http://cam1/live.m3u8"),
            StreamEntry::new("", ""),
        ]);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["Name,Stream URL", "Cam 1,http://cam1/live.m3u8", ","]);
    }

    #[test]
    fn empty_preset_is_header_only() {
        let text = to_string(&[]);

        assert_eq!(text.lines().collect::<Vec<_>>(), vec!["Name,Stream URL"]);
        assert!(read_entries(text.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn quotes_delimiters_and_quotes() {
        let entries = vec![
            StreamEntry::new("Studio, main", "http://x/?a=1,2"),
            StreamEntry::new("The \"big\" one", "rtsp://y/stream"),
        ];

        let text = to_string(&entries);
        assert!(text.contains("\"Studio, main\""));
        assert!(text.contains("\"The \"\"big\"\" one\""));

        assert_eq!(read_entries(text.as_bytes()).unwrap(), entries);
    }

    #[test]
    fn missing_values_default_to_empty() {
        let text = "Name,Stream URL\nOnly name\n,http://only/url\n";

        let entries = read_entries(text.as_bytes()).unwrap();

        assert_eq!(
            entries,
            vec![
                StreamEntry::new("Only name", ""),
                StreamEntry::new("", "http://only/url"),
            ]
        );
    }

    #[test]
    fn columns_are_found_by_header() {
        let text = "Stream URL,Extra,Name\nhttp://a,x,A\n";

        let entries = read_entries(text.as_bytes()).unwrap();

        assert_eq!(entries, vec![StreamEntry::new("A", "http://a")]);
    }

    #[test]
    fn absent_column_reads_as_empty() {
        let text = "Name\nA\nB\n";

        let entries = read_entries(text.as_bytes()).unwrap();

        assert_eq!(entries, vec![StreamEntry::new("A", ""), StreamEntry::new("B", "")]);
    }

    #[test]
    fn empty_input_has_no_entries() {
        assert!(read_entries(&b""[..]).unwrap().is_empty());
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let bytes = b"Name,Stream URL\n\xff\xfe,http://x\n";

        assert!(read_entries(&bytes[..]).is_err());
    }
}
