//! Positional segmentation of cover letters.

use super::{split_blocks, Block};
use crate::error::{Error, Result};

/// The positional regions of a cover letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSections<'a> {
    /// First line of block 0
    pub date: &'a str,

    /// Block 1
    pub recipient: Block<'a>,

    /// First line of block 2
    pub subject: &'a str,

    /// Blocks between the subject and the last block; empty when the letter
    /// has exactly four blocks
    pub body: Vec<Block<'a>>,

    /// The last block
    pub signature: Block<'a>,
}

/// Split a letter into date, recipient, subject, body and signature.
///
/// Fails with [`Error::Structure`] when fewer than four blocks are present.
/// With exactly four blocks the fourth one is the signature and the body is
/// empty.
pub fn segment_letter(text: &str) -> Result<LetterSections<'_>> {
    let blocks = split_blocks(text);
    let count = blocks.len();
    log::debug!("Segmented letter into {} blocks", count);

    let mut blocks = blocks.into_iter();
    match (
        blocks.next(),
        blocks.next(),
        blocks.next(),
        blocks.next_back(),
    ) {
        (Some(date), Some(recipient), Some(subject), Some(signature)) => Ok(LetterSections {
            date: date.first_line(),
            recipient,
            subject: subject.first_line(),
            body: blocks.collect(),
            signature,
        }),
        _ => Err(Error::Structure { blocks: count }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LETTER: &str = "Saint-Maur-des-Fossés, le 3 mars 2025

Entreprise Test
Service RH
94000 Créteil

Objet : Candidature au poste de technicien
Réf. 1234

Madame, Monsieur,

Je vous propose ma candidature.
Disponible immédiatement.

Jean Dupont";

    #[test]
    fn test_segment_letter() {
        let sections = segment_letter(LETTER).unwrap();
        assert_eq!(sections.date, "Saint-Maur-des-Fossés, le 3 mars 2025");
        assert_eq!(
            sections.recipient.lines(),
            &["Entreprise Test", "Service RH", "94000 Créteil"]
        );
        assert_eq!(sections.subject, "Objet : Candidature au poste de technicien");
        assert_eq!(sections.body.len(), 2);
        assert_eq!(sections.body[1].len(), 2);
        assert_eq!(sections.signature.lines(), &["Jean Dupont"]);
    }

    #[test]
    fn test_four_blocks_leave_body_empty() {
        let sections = segment_letter("date\n\nrecipient\n\nsubject\n\nonly block").unwrap();
        assert!(sections.body.is_empty());
        assert_eq!(sections.signature.first_line(), "only block");
    }

    #[test]
    fn test_too_few_blocks() {
        let err = segment_letter("date\n\nrecipient\n\nsubject").unwrap_err();
        assert!(matches!(err, Error::Structure { blocks: 3 }));

        let err = segment_letter("").unwrap_err();
        assert!(matches!(err, Error::Structure { blocks: 0 }));
    }
}
