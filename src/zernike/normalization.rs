/// Obscuration-dependent constants shared by every annular Zernike evaluator.
///
/// Built once per call, before the point loop, and only read afterwards. The
/// surface, gradient and Jacobian passes all draw from the same table so the
/// three can never disagree on a normalization.
///
/// Field names follow the mode families (`coma` = modes 6/7, `coma2` = modes
/// 15/16, ...). `_den`/`_num` pairs are the composite factors of the
/// obscuration-corrected radial polynomials; `_sq` fields are the squared forms
/// the second-order Jacobian divides by, computed directly rather than by
/// squaring the rooted values.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalization {
    pub(crate) e2: f64,
    pub(crate) e4: f64,
    pub(crate) e6: f64,
    pub(crate) e8: f64,
    pub(crate) e10: f64,
    pub(crate) e12: f64,
    pub(crate) e14: f64,
    pub(crate) e16: f64,

    pub(crate) sqrt3: f64,
    pub(crate) sqrt5: f64,
    pub(crate) sqrt6: f64,
    pub(crate) sqrt7: f64,
    pub(crate) sqrt8: f64,
    pub(crate) sqrt10: f64,
    pub(crate) sqrt12: f64,
    pub(crate) sqrt14: f64,

    pub(crate) tilt: f64,
    pub(crate) defocus: f64,
    pub(crate) astig: f64,
    pub(crate) coma: f64,
    pub(crate) trefoil: f64,
    pub(crate) spherical: f64,
    pub(crate) astig2_den: f64,
    pub(crate) astig2_num: f64,
    pub(crate) tetrafoil: f64,
    pub(crate) coma2_den: f64,
    pub(crate) coma2_num: f64,
    pub(crate) trefoil2_den: f64,
    pub(crate) trefoil2_num: f64,
    pub(crate) pentafoil: f64,
    pub(crate) spherical2: f64,
    pub(crate) astig3_a: f64,
    pub(crate) astig3_b: f64,
    pub(crate) astig3_c: f64,
    pub(crate) astig3_den: f64,
    pub(crate) tetrafoil2_q: f64,
    pub(crate) tetrafoil2_den: f64,
    pub(crate) hexafoil: f64,

    pub(crate) astig_sq: f64,
    pub(crate) coma_sq: f64,
    pub(crate) trefoil_sq: f64,
    pub(crate) spherical_sq: f64,
    pub(crate) astig2_den_sq: f64,
    pub(crate) astig2_num_sq: f64,
    pub(crate) tetrafoil_sq: f64,
    pub(crate) coma2_den_sq: f64,
    pub(crate) coma2_num_sq: f64,
    pub(crate) trefoil2_den_sq: f64,
    pub(crate) trefoil2_num_sq: f64,
    pub(crate) pentafoil_sq: f64,
    pub(crate) spherical2_sq: f64,
}

impl Normalization {
    /// Derives every constant from the obscuration `e`.
    ///
    /// `e = 1` zeroes several denominators; the resulting NaN/Inf values are
    /// passed through untouched.
    pub fn new(e: f64) -> Self {
        let e2 = e * e;
        let e4 = e2 * e2;
        let e6 = e4 * e2;
        let e8 = e6 * e2;
        let e10 = e8 * e2;
        let e12 = e10 * e2;
        let e14 = e12 * e2;
        let e16 = e14 * e2;

        let one_m = 1.0 - e2;

        // Recurring polynomials in e².
        let s2 = 1.0 + e2 + e4;
        let s3 = 1.0 + e2 + e4 + e6;
        let s4 = 1.0 + e2 + e4 + e6 + e8;
        let s5 = 1.0 + e2 + e4 + e6 + e8 + e10;
        let p141 = 1.0 + 4.0 * e2 + e4;
        let p14041 = 1.0 + 4.0 * e2 + 10.0 * e4 + 4.0 * e6 + e8;
        let p1991 = 1.0 + 9.0 * e2 + 9.0 * e4 + e6;
        let p1_20 = 1.0 + 4.0 * e2 + 10.0 * e4 + 20.0 * e6 + 10.0 * e8 + 4.0 * e10 + e12;

        let coma_sq = one_m.powi(2) * (1.0 + e2) * p141;
        let astig2_den = one_m.powi(3) * s2;
        let astig2_num_sq = one_m.powi(4) * s2 / p14041;
        let coma2_den = one_m.powi(3) * p141;
        let coma2_num_sq = one_m.powi(2) * p141 / p1991;
        let trefoil2_den = one_m.powi(4) * (1.0 + e2) * (1.0 + e4);
        let trefoil2_num_sq = one_m.powi(6) * (1.0 + e2) * (1.0 + e4) / p1_20;

        let astig3_den = one_m.powi(2)
            * (p14041
                * (1.0
                    + 9.0 * e2
                    + 45.0 * e4
                    + 65.0 * e6
                    + 45.0 * e8
                    + 9.0 * e10
                    + e12))
                .sqrt();
        let tetrafoil2_q = -5.0 * (1.0 - e12) / (1.0 - e10);
        let tetrafoil2_den = (1.0 / one_m
            * (36.0 * (1.0 - e14) - 35.0 * (1.0 - e12).powi(2) / (1.0 - e10)))
            .sqrt();

        Self {
            e2,
            e4,
            e6,
            e8,
            e10,
            e12,
            e14,
            e16,

            sqrt3: 3f64.sqrt(),
            sqrt5: 5f64.sqrt(),
            sqrt6: 6f64.sqrt(),
            sqrt7: 7f64.sqrt(),
            sqrt8: 8f64.sqrt(),
            sqrt10: 10f64.sqrt(),
            sqrt12: 12f64.sqrt(),
            sqrt14: 14f64.sqrt(),

            tilt: (1.0 + e2).sqrt(),
            defocus: one_m,
            astig: s2.sqrt(),
            coma: coma_sq.sqrt(),
            trefoil: s3.sqrt(),
            spherical: one_m.powi(2),
            astig2_den,
            astig2_num: astig2_num_sq.sqrt(),
            tetrafoil: s4.sqrt(),
            coma2_den,
            coma2_num: coma2_num_sq.sqrt(),
            trefoil2_den,
            trefoil2_num: trefoil2_num_sq.sqrt(),
            pentafoil: s5.sqrt(),
            spherical2: one_m.powi(3),
            astig3_a: 15.0 * p14041,
            astig3_b: -20.0 * (1.0 + 4.0 * e2 + 10.0 * e4 + 10.0 * e6 + 4.0 * e8 + e10),
            astig3_c: 6.0 * p1_20,
            astig3_den,
            tetrafoil2_q,
            tetrafoil2_den,
            hexafoil: (one_m / (1.0 - e14)).sqrt(),

            astig_sq: s2,
            coma_sq,
            trefoil_sq: s3,
            spherical_sq: one_m.powi(4),
            astig2_den_sq: one_m.powi(6) * s2.powi(2),
            astig2_num_sq,
            tetrafoil_sq: s4,
            coma2_den_sq: one_m.powi(6) * p141.powi(2),
            coma2_num_sq,
            trefoil2_den_sq: one_m.powi(8) * (1.0 + e2).powi(2) * (1.0 + e4).powi(2),
            trefoil2_num_sq,
            pentafoil_sq: s5,
            spherical2_sq: one_m.powi(6),
        }
    }
}
