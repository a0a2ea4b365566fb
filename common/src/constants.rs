//! Fixed identifiers of the establishment search page.
//!
//! The page is an ASP.NET WebForms page, so form field names use `:` as the
//! naming container separator while element ids use `_`.

use std::time::Duration;

pub const SOURCE_URL: &str = "https://www.mineduc.gob.gt/BUSCAESTABLECIMIENTO_GE/";

pub const DEPARTMENT_FIELD: &str = "_ctl0:ContentPlaceHolder1:cmbDepartamento";
pub const DEPARTMENT_SELECT_ID: &str = "_ctl0_ContentPlaceHolder1_cmbDepartamento";

pub const LEVEL_FIELD: &str = "_ctl0:ContentPlaceHolder1:cmbNivel";
pub const LEVEL_SELECT_ID: &str = "_ctl0_ContentPlaceHolder1_cmbNivel";

/// Level code for "diversificado".
pub const DIVERSIFIED_LEVEL: &str = "46";

/// Image button posted as `<name>.x` / `<name>.y` click coordinates.
pub const SUBMIT_BUTTON: &str = "_ctl0:ContentPlaceHolder1:IbtnConsultar";
pub const SUBMIT_COORDINATE: &str = "1";

/// Placeholder option meaning no department was chosen.
pub const SENTINEL_OPTION: &str = "SELECCIONE UNO";

pub const FILE_PREFIX: &str = "busqueda_";

pub const REQUEST_DELAY: Duration = Duration::from_millis(1500);
