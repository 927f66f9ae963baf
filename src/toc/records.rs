//! Archive-level checksum and signature records.
//!
//! Digest values are embedded in the TOC as lowercase hex text; certificate
//! data is base64 with line wrapping. Both are decoded here at parse time
//! rather than surfaced as raw text.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use roxmltree::Node;

use crate::format::element;
use crate::{Error, Result};

/// An archive-wide checksum declared in the TOC.
///
/// Distinct from per-file digests embedded in a [`FileEntry`]'s extended
/// items: this record is scoped to the archive itself. Verifying the digest
/// against recomputed data is the caller's concern.
///
/// [`FileEntry`]: crate::FileEntry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumRecord {
    /// Algorithm label as declared by the `style` attribute (e.g. `sha1`).
    pub style: String,
    /// The digest bytes, hex-decoded from the record's text payload.
    pub value: Vec<u8>,
}

impl ChecksumRecord {
    pub(crate) fn from_node(node: Node<'_, '_>) -> Result<Self> {
        let style = node
            .attribute(element::STYLE)
            .ok_or_else(|| Error::toc_parse("checksum record missing style attribute"))?
            .to_string();

        let text = direct_text(node);
        let value = hex::decode(text.trim())
            .map_err(|e| Error::toc_parse(format!("checksum value is not valid hex: {e}")))?;

        Ok(Self { style, value })
    }
}

/// An archive-wide signature block declared in the TOC.
///
/// The signature bytes themselves live in the archive heap; this record
/// carries their declared location plus the embedded certificate chain,
/// all opaque to this crate. Cryptographic verification is the caller's
/// concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureRecord {
    /// Signature scheme label as declared by the `style` attribute
    /// (e.g. `RSA`, `CMS`).
    pub style: String,
    /// Heap offset of the raw signature bytes, when declared.
    pub offset: Option<u64>,
    /// Length of the raw signature bytes, when declared.
    pub size: Option<u64>,
    /// DER certificate chain, base64-decoded, outermost first.
    pub certificates: Vec<Vec<u8>>,
}

impl SignatureRecord {
    pub(crate) fn from_node(node: Node<'_, '_>) -> Result<Self> {
        let style = node
            .attribute(element::STYLE)
            .ok_or_else(|| Error::toc_parse("signature record missing style attribute"))?
            .to_string();

        let offset = numeric_child(node, element::OFFSET)?;
        let size = numeric_child(node, element::SIZE)?;

        let mut certificates = Vec::new();
        for cert in node
            .descendants()
            .filter(|n| n.is_element() && n.tag_name().name() == element::X509_CERTIFICATE)
        {
            // Certificate data is line-wrapped in the TOC
            let blob: String = direct_text(cert)
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            let der = BASE64
                .decode(&blob)
                .map_err(|e| Error::toc_parse(format!("certificate is not valid base64: {e}")))?;
            certificates.push(der);
        }

        Ok(Self {
            style,
            offset,
            size,
            certificates,
        })
    }
}

/// Concatenates the direct text children of a node.
fn direct_text(node: Node<'_, '_>) -> String {
    node.children()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

fn numeric_child(node: Node<'_, '_>, name: &str) -> Result<Option<u64>> {
    let Some(child) = node
        .children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
    else {
        return Ok(None);
    };
    let text = direct_text(child);
    let value = text
        .trim()
        .parse::<u64>()
        .map_err(|_| Error::toc_parse(format!("signature {name} is not numeric")))?;
    Ok(Some(value))
}
