use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use crate::input::{InputError, open_maybe_gz};
use crate::registry::mapping::is_missing;

/// Column names recognized as the person identifier.
const ID_COLUMNS: &[&str] = &["person_id", "person", "id", "respondent_id"];

#[derive(Debug, Clone, PartialEq)]
pub enum RawResponse {
    Missing,
    Numeric(f64),
    Label(String),
}

impl RawResponse {
    pub fn from_cell(cell: &str) -> Self {
        let trimmed = cell.trim();
        if is_missing(trimmed) {
            return RawResponse::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(v) => RawResponse::Numeric(v),
            Err(_) => RawResponse::Label(trimmed.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResponseRow {
    pub person_id: String,
    pub cells: Vec<RawResponse>,
}

/// One row per person, one column per question. Cells are never mutated.
#[derive(Debug, Clone, Default)]
pub struct ResponseTable {
    questions: Vec<String>,
    column_by_question: HashMap<String, usize>,
    rows: Vec<ResponseRow>,
}

impl ResponseTable {
    pub fn new<S: Into<String>>(questions: impl IntoIterator<Item = S>) -> Self {
        let questions: Vec<String> = questions
            .into_iter()
            .map(|q| {
                let q: String = q.into();
                q.trim().to_string()
            })
            .collect();
        let mut column_by_question = HashMap::with_capacity(questions.len());
        for (idx, q) in questions.iter().enumerate() {
            column_by_question.entry(q.clone()).or_insert(idx);
        }
        Self {
            questions,
            column_by_question,
            rows: Vec::new(),
        }
    }

    /// Appends a row. Short rows are padded with missing cells and extra
    /// cells are dropped.
    pub fn push_row(&mut self, person_id: impl Into<String>, mut cells: Vec<RawResponse>) {
        cells.resize(self.questions.len(), RawResponse::Missing);
        self.rows.push(ResponseRow {
            person_id: person_id.into(),
            cells,
        });
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn rows(&self) -> &[ResponseRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, person_id: &str) -> Option<&ResponseRow> {
        self.rows.iter().find(|r| r.person_id == person_id)
    }

    /// Raw response of a row to a question; `None` when the question is not
    /// a column of this table.
    pub fn response<'a>(&self, row: &'a ResponseRow, question: &str) -> Option<&'a RawResponse> {
        let idx = *self.column_by_question.get(question.trim())?;
        row.cells.get(idx)
    }
}

pub fn load_responses(path: &Path) -> Result<ResponseTable, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let table = parse_responses(&mut reader)?;
    tracing::info!(
        path = %path.display(),
        persons = table.len(),
        questions = table.questions().len(),
        "loaded responses"
    );
    Ok(table)
}

pub fn parse_responses(reader: &mut dyn BufRead) -> Result<ResponseTable, InputError> {
    let mut buf = String::new();

    let read = reader.read_line(&mut buf)?;
    if read == 0 {
        return Err(InputError::Parse("responses file is empty".to_string()));
    }
    let header_line = buf.trim_end_matches(['\n', '\r']).trim_start_matches('\u{feff}');
    let header_cols: Vec<String> = header_line
        .split('\t')
        .map(|s| s.trim().to_string())
        .collect();
    if header_cols.iter().all(|c| c.is_empty()) {
        return Err(InputError::Parse("responses header is empty".to_string()));
    }

    let id_col = header_cols
        .iter()
        .position(|name| ID_COLUMNS.contains(&name.to_ascii_lowercase().as_str()));

    let question_cols: Vec<usize> = (0..header_cols.len())
        .filter(|&idx| Some(idx) != id_col)
        .collect();
    let mut table = ResponseTable::new(question_cols.iter().map(|&idx| header_cols[idx].clone()));

    let mut line_no = 1usize;
    let mut seen_ids: HashMap<String, usize> = HashMap::new();
    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }
        let cols: Vec<&str> = line.split('\t').collect();
        if cols.len() > header_cols.len() {
            return Err(InputError::Parse(format!(
                "responses line {} has {} columns, header has {}",
                line_no,
                cols.len(),
                header_cols.len()
            )));
        }

        let row_index = table.len();
        let person_id = match id_col {
            Some(idx) => {
                let id = cols.get(idx).map(|s| s.trim()).unwrap_or_default();
                if id.is_empty() {
                    format!("person_{row_index}")
                } else {
                    id.to_string()
                }
            }
            None => format!("person_{row_index}"),
        };
        if let Some(prev) = seen_ids.insert(person_id.clone(), line_no) {
            return Err(InputError::InvalidInput(format!(
                "duplicate person id {} on lines {} and {}",
                person_id, prev, line_no
            )));
        }

        let cells = question_cols
            .iter()
            .map(|&idx| {
                cols.get(idx)
                    .map(|c| RawResponse::from_cell(c))
                    .unwrap_or(RawResponse::Missing)
            })
            .collect();
        table.push_row(person_id, cells);
    }

    if table.is_empty() {
        tracing::warn!("responses file has a header but no rows");
    }

    Ok(table)
}
