//! ASCII STL parse path.
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex x y z
//!       vertex x y z
//!       vertex x y z
//!     endloop
//!   endfacet
//! endsolid name
//! ```
//!
//! Only `solid`, `facet`, `vertex` and `endfacet` lines carry state; every
//! other line is skipped.

use mesh_types::{Mesh, Point3, Triangle, Vec3};
use tracing::debug;

use crate::config::DecoderConfig;
use crate::format::StlFormat;
use crate::stats::DecodeStats;
use crate::validate::{check_facet, Rejection};
use crate::Decoded;

/// State of the facet currently being read.
#[derive(Debug, Default)]
struct FacetAccumulator {
    open: bool,
    /// `None` when the normal is missing or failed to parse.
    normal: Option<Vec3>,
    non_finite_normal: bool,
    vertices: Vec<Point3>,
}

impl FacetAccumulator {
    fn is_pending(&self) -> bool {
        self.open || !self.vertices.is_empty()
    }

    fn begin(&mut self, normal: Option<[f64; 3]>) {
        self.open = true;
        match normal.map(Vec3::from_array) {
            Some(n) if n.is_finite() => self.normal = Some(n),
            Some(_) => self.non_finite_normal = true,
            None => self.normal = None,
        }
    }

    /// Consume the accumulated facet and reset for the next one.
    fn finish(&mut self, tolerance: f64) -> Result<Triangle, Rejection> {
        let facet = std::mem::take(self);
        if facet.non_finite_normal {
            return Err(Rejection::InvalidNumeric);
        }
        let (Some(normal), [a, b, c]) = (facet.normal, facet.vertices.as_slice()) else {
            return Err(Rejection::Incomplete);
        };
        let vertices = [*a, *b, *c];
        check_facet(&vertices, &normal, tolerance)?;
        Ok(Triangle { vertices, normal })
    }
}

struct AsciiParser<'c> {
    config: &'c DecoderConfig,
    facet: FacetAccumulator,
    mesh: Mesh,
    stats: DecodeStats,
    name: Option<String>,
}

impl<'c> AsciiParser<'c> {
    fn new(config: &'c DecoderConfig) -> Self {
        Self {
            config,
            facet: FacetAccumulator::default(),
            mesh: Mesh::new(),
            stats: DecodeStats::default(),
            name: None,
        }
    }

    fn line(&mut self, line: &str) {
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return;
        };

        if keyword.eq_ignore_ascii_case("facet") {
            if self.facet.is_pending() {
                // The previous facet never reached `endfacet`.
                self.close();
            }
            let normal = match tokens.next() {
                Some(word) if word.eq_ignore_ascii_case("normal") => parse_triple(tokens),
                _ => None,
            };
            self.facet.begin(normal);
        } else if keyword.eq_ignore_ascii_case("vertex") {
            match parse_triple(tokens).map(|c| Point3::new(c[0], c[1], c[2])) {
                Some(p) if p.is_finite() => self.facet.vertices.push(p),
                _ => {
                    debug!(line, "dropping unreadable vertex");
                    self.stats.rejected_vertices += 1;
                }
            }
        } else if keyword.eq_ignore_ascii_case("endfacet") {
            self.close();
        } else if keyword.eq_ignore_ascii_case("solid")
            && self.name.is_none()
            && self.stats.total == 0
        {
            let rest: Vec<&str> = tokens.collect();
            if !rest.is_empty() {
                self.name = Some(rest.join(" "));
            }
        }
    }

    fn close(&mut self) {
        let index = self.stats.total;
        match self.facet.finish(self.config.degenerate_tolerance) {
            Ok(triangle) => {
                self.stats.record_valid(triangle.normal.is_zero());
                self.mesh.push(triangle);
            }
            Err(rejection) => {
                debug!(index, reason = %rejection, "dropping facet");
                self.stats.record_rejection(rejection);
            }
        }
    }

    fn finish(mut self) -> Decoded {
        if self.facet.is_pending() {
            self.close();
        }
        Decoded {
            format: StlFormat::Ascii,
            name: self.name,
            mesh: self.mesh,
            stats: self.stats,
        }
    }
}

/// Parse the next three tokens as floats. Extra tokens are ignored.
fn parse_triple<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Option<[f64; 3]> {
    let mut next = || tokens.next()?.parse::<f64>().ok();
    Some([next()?, next()?, next()?])
}

/// Decode `bytes` as ASCII STL regardless of what sniffing would say.
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn decode_ascii(bytes: &[u8], config: &DecoderConfig) -> Decoded {
    let text = String::from_utf8_lossy(bytes);
    let mut parser = AsciiParser::new(config);
    for line in text.lines() {
        parser.line(line);
    }
    parser.finish()
}
