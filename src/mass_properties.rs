//! Centre of mass and moment of inertia of uniformly dense simple polygons.
//!
//! The polygon is split into a fan of triangles anchored at its first vertex. Each
//! triangle contributes its area weighted centroid to the centre of mass and its own
//! moment of inertia, moved to the centre of mass with the parallel axis theorem.
//!
//! Triangle areas carry the sign of their winding. For concave outlines some fan
//! triangles lie outside the polygon and wind the other way, so their contribution
//! is subtracted again. The overall winding of the outline does not matter.

use crate::{Degeneracy, PhysicsError, Result, Vector2};

/// How the mass of the body is distributed onto the fan triangles when
/// computing the moment of inertia.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MomentModel {
    /// Every triangle gets the share of the mass that matches its share of the area.
    #[default]
    PerTriangle,
    /// Every triangle is treated as if it had the full body mass.
    /// Overestimates the moment of inertia by roughly the number of fan triangles.
    /// Only useful for reproducing results of older simulations.
    TotalMass,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle(pub [Vector2; 3]);

impl Triangle {
    pub fn side_lengths(&self) -> [f32; 3] {
        let [a, b, c] = self.0;
        [a.distance(b), b.distance(c), c.distance(a)]
    }

    /// Unsigned area via Heron's formula.
    ///
    /// Evaluated in the rearranged form `sqrt((a+(b+c))(c-(a-b))(c+(a-b))(a+(b-c))) / 4`
    /// with `a >= b >= c`, which stays accurate for long thin triangles.
    pub fn area(&self) -> f32 {
        let mut sides = self.side_lengths();
        sides.sort_unstable_by(|l, r| r.total_cmp(l));
        let [a, b, c] = sides;
        // Rounding can push the radicand of (nearly) collinear points below zero.
        let radicand = (a + (b + c)) * (c - (a - b)) * (c + (a - b)) * (a + (b - c));
        radicand.max(0.0).sqrt() / 4.0
    }

    /// [`Self::area`], negative if the vertices are ordered clockwise.
    pub fn signed_area(&self) -> f32 {
        let [a, b, c] = self.0;
        self.area().copysign((b - a).perp_dot(c - a))
    }

    /// Mean of the three vertices, built as the point a third of the way from the
    /// midpoint of the first edge to the opposite vertex.
    pub fn centroid(&self) -> Vector2 {
        let [a, b, c] = self.0;
        let midpoint = (a + b).scale(0.5);
        midpoint + (c - midpoint).scale(1.0 / 3.0)
    }

    /// Moment of inertia of a solid triangle of the given mass around its own centroid.
    pub fn moment_about_centroid(&self, mass: f32) -> f32 {
        let [a, b, c] = self.side_lengths();
        mass * (a * a + b * b + c * c) / 36.0
    }
}

/// Splits the polygon into triangles that all share the first vertex.
pub fn fan(vertices: &[Vector2]) -> Result<Vec<Triangle>> {
    if vertices.len() < 3 {
        return Err(Degeneracy::TooFewVertices(vertices.len()).into());
    }
    let anchor = vertices[0];
    Ok(vertices[1..]
        .windows(2)
        .map(|edge| Triangle([anchor, edge[0], edge[1]]))
        .collect())
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MassProperties {
    /// In the same frame as the vertices that were solved for.
    pub centre_of_mass: Vector2,
    /// Always positive, independent of winding.
    pub area: f32,
    /// Around the centre of mass. Only known if a mass was supplied.
    pub moment_of_inertia: Option<f32>,
}

impl MassProperties {
    /// Moves the vertices so that the centre of mass ends up at the origin.
    pub fn recentre(&self, vertices: &[Vector2]) -> Vec<Vector2> {
        vertices.iter().map(|&v| v - self.centre_of_mass).collect()
    }
}

/// [`solve_with`] using [`MomentModel::PerTriangle`].
pub fn solve(vertices: &[Vector2], mass: Option<f32>) -> Result<MassProperties> {
    solve_with(vertices, mass, MomentModel::PerTriangle)
}

pub fn solve_with(
    vertices: &[Vector2],
    mass: Option<f32>,
    model: MomentModel,
) -> Result<MassProperties> {
    if let Some(mass) = mass {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(PhysicsError::InvalidMass(mass));
        }
    }
    let triangles = fan(vertices)?;
    if let Some(i) = vertices.iter().position(|v| !v.is_finite()) {
        return Err(Degeneracy::NonFiniteVertex(i).into());
    }

    let weighted: Vec<(Triangle, f32)> = triangles
        .into_iter()
        .map(|t| {
            let area = t.signed_area();
            (t, area)
        })
        .collect();
    let area: f32 = weighted.iter().map(|&(_, area)| area).sum();
    if !area.is_finite() {
        return Err(Degeneracy::NonFiniteArea.into());
    }

    // Rounding noise of the triangle areas is a few ulps of the squared side lengths.
    let extent = vertices
        .iter()
        .map(|&v| (v - vertices[0]).magnitude_squared())
        .fold(0.0, f32::max);
    if area.abs() <= extent * f32::EPSILON * 4.0 {
        return Err(Degeneracy::ZeroArea.into());
    }

    let centre_of_mass = weighted
        .iter()
        .fold(Vector2::ZERO, |acc, &(t, a)| acc + t.centroid().scale(a))
        .checked_div(area)?;
    if !centre_of_mass.is_finite() {
        return Err(Degeneracy::NonFiniteArea.into());
    }

    let moment_of_inertia = mass.map(|mass| {
        weighted
            .iter()
            .map(|&(t, a)| {
                let triangle_mass = match model {
                    MomentModel::PerTriangle => a / area * mass,
                    MomentModel::TotalMass => mass,
                };
                let offset = (t.centroid() - centre_of_mass).magnitude_squared();
                t.moment_about_centroid(triangle_mass) + triangle_mass * offset
            })
            .sum::<f32>()
    });

    Ok(MassProperties {
        centre_of_mass,
        area: area.abs(),
        moment_of_inertia,
    })
}
