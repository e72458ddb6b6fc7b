//! 几何图元定义
//!
//! 平面图元（实现 [`Shape2D`]）：
//! - 点 (Point)
//! - 线段 (Line)
//! - 圆 (Circle)
//! - 正方形 (Square)
//! - 矩形 (Rectangle)
//! - 椭圆 (Oval)
//! - 正多边形 (RegularPolygon)
//!
//! 立体图元（实现 [`Shape3D`]）：
//! - 平行六面体 (Parallelepiped)
//! - 正四面体 (Tetrahedron)
//!
//! 所有尺寸参数（半径、边长、宽高等）在构造时校验为严格正数，
//! 构造失败时不会产生任何部分构造的图元。

use crate::error::ShapeError;
use crate::math::{Point2, Point3};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::f64::consts::PI;
use std::fmt;

/// 平面图形：面积与周长
pub trait Shape2D {
    fn area(&self) -> Result<f64, ShapeError>;
    fn perimeter(&self) -> Result<f64, ShapeError>;
}

/// 立体图形：体积与表面积
pub trait Shape3D {
    fn volume(&self) -> Result<f64, ShapeError>;
    fn surface_area(&self) -> Result<f64, ShapeError>;
}

/// 校验尺寸为严格正数（NaN 同样被拒绝）
fn positive(field: &'static str, value: f64) -> Result<f64, ShapeError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ShapeError::NonPositive { field, value })
    }
}

/// 派生度量必须是有限值，溢出时报告计算错误
fn finite(metric: &'static str, value: f64) -> Result<f64, ShapeError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ShapeError::Calculation { metric, value })
    }
}

fn xy(p: &Point2) -> Value {
    json!({ "x": p.x, "y": p.y })
}

fn xyz(p: &Point3) -> Value {
    json!({ "x": p.x, "y": p.y, "z": p.z })
}

/// 计算得到的度量
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metrics {
    Planar { area: f64, perimeter: f64 },
    Solid { volume: f64, surface_area: f64 },
}

fn planar(shape: &impl Shape2D) -> Result<Metrics, ShapeError> {
    Ok(Metrics::Planar {
        area: shape.area()?,
        perimeter: shape.perimeter()?,
    })
}

fn solid(shape: &impl Shape3D) -> Result<Metrics, ShapeError> {
    Ok(Metrics::Solid {
        volume: shape.volume()?,
        surface_area: shape.surface_area()?,
    })
}

/// 几何类型枚举
///
/// 变体集合是封闭的，所有分派都通过穷尽匹配完成。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Point(Point),
    Line(Line),
    Circle(Circle),
    Square(Square),
    Rectangle(Rectangle),
    Oval(Oval),
    RegularPolygon(RegularPolygon),
    Parallelepiped(Parallelepiped),
    Tetrahedron(Tetrahedron),
}

impl Geometry {
    /// 获取几何的类型名称
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::Line(_) => "Line",
            Geometry::Circle(_) => "Circle",
            Geometry::Square(_) => "Square",
            Geometry::Rectangle(_) => "Rectangle",
            Geometry::Oval(_) => "Oval",
            Geometry::RegularPolygon(_) => "RegularPolygon",
            Geometry::Parallelepiped(_) => "Parallelepiped",
            Geometry::Tetrahedron(_) => "Tetrahedron",
        }
    }

    /// 维度（2 或 3）
    pub fn dimension(&self) -> u8 {
        match self {
            Geometry::Parallelepiped(_) | Geometry::Tetrahedron(_) => 3,
            _ => 2,
        }
    }

    /// 计算面积/周长或体积/表面积
    pub fn metrics(&self) -> Result<Metrics, ShapeError> {
        match self {
            Geometry::Point(p) => planar(p),
            Geometry::Line(l) => planar(l),
            Geometry::Circle(c) => planar(c),
            Geometry::Square(s) => planar(s),
            Geometry::Rectangle(r) => planar(r),
            Geometry::Oval(o) => planar(o),
            Geometry::RegularPolygon(p) => planar(p),
            Geometry::Parallelepiped(p) => solid(p),
            Geometry::Tetrahedron(t) => solid(t),
        }
    }

    /// 图元特有的字段（坐标以嵌套记录表示）
    pub fn specific_info(&self) -> Map<String, Value> {
        let value = match self {
            Geometry::Point(p) => json!({ "x": p.position.x, "y": p.position.y }),
            Geometry::Line(l) => json!({
                "start_point": xy(&l.start),
                "end_point": xy(&l.end),
                "length": l.length(),
            }),
            Geometry::Circle(c) => json!({
                "center": xy(&c.center),
                "radius": c.radius,
            }),
            Geometry::Square(s) => json!({
                "bottom_left": xy(&s.corner),
                "top_right": xy(&s.top_right()),
                "side_length": s.side,
            }),
            Geometry::Rectangle(r) => json!({
                "bottom_left": xy(&r.corner),
                "top_right": xy(&r.top_right()),
                "width": r.width,
                "height": r.height,
            }),
            Geometry::Oval(o) => json!({
                "center": xy(&o.center),
                "radius_x": o.radius_x,
                "radius_y": o.radius_y,
            }),
            Geometry::RegularPolygon(p) => json!({
                "center": xy(&p.center),
                "num_sides": p.sides,
                "side_length": p.side,
                "radius": p.circumradius(),
                "apothem": p.apothem(),
            }),
            Geometry::Parallelepiped(p) => json!({
                "origin": xyz(&p.origin),
                "width": p.width,
                "height": p.height,
                "depth": p.depth,
            }),
            Geometry::Tetrahedron(t) => json!({
                "center": xyz(&t.center),
                "edge_length": t.edge,
                "height": t.height(),
            }),
        };

        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    /// 重新校验构造约束
    ///
    /// 反序列化会绕过构造函数，加载文件后需要调用。
    pub fn validate(&self) -> Result<(), ShapeError> {
        match self {
            Geometry::Point(_) | Geometry::Line(_) => Ok(()),
            Geometry::Circle(c) => Circle::new(c.center, c.radius).map(drop),
            Geometry::Square(s) => Square::new(s.corner, s.side).map(drop),
            Geometry::Rectangle(r) => Rectangle::new(r.corner, r.width, r.height).map(drop),
            Geometry::Oval(o) => Oval::new(o.center, o.radius_x, o.radius_y).map(drop),
            Geometry::RegularPolygon(p) => {
                RegularPolygon::new(p.center, i64::from(p.sides), p.side).map(drop)
            }
            Geometry::Parallelepiped(p) => {
                Parallelepiped::new(p.origin, p.width, p.height, p.depth).map(drop)
            }
            Geometry::Tetrahedron(t) => Tetrahedron::new(t.center, t.edge).map(drop),
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Geometry::Point(p) => write!(f, "Point({:?}, {:?})", p.position.x, p.position.y),
            Geometry::Line(l) => write!(
                f,
                "Line(({:?}, {:?}), ({:?}, {:?})), Length: {:.2}",
                l.start.x,
                l.start.y,
                l.end.x,
                l.end.y,
                l.length()
            ),
            Geometry::Circle(c) => write!(
                f,
                "Circle(center=({:?}, {:?}), radius={:?})",
                c.center.x, c.center.y, c.radius
            ),
            Geometry::Square(s) => write!(
                f,
                "Square(bottom_left=({:?}, {:?}), side_length={:?})",
                s.corner.x, s.corner.y, s.side
            ),
            Geometry::Rectangle(r) => write!(
                f,
                "Rectangle(bottom_left=({:?}, {:?}), width={:?}, height={:?})",
                r.corner.x, r.corner.y, r.width, r.height
            ),
            Geometry::Oval(o) => write!(
                f,
                "Oval(center=({:?}, {:?}), radius_x={:?}, radius_y={:?})",
                o.center.x, o.center.y, o.radius_x, o.radius_y
            ),
            Geometry::RegularPolygon(p) => write!(
                f,
                "RegularPolygon(center=({:?}, {:?}), sides={}, side_length={:?})",
                p.center.x, p.center.y, p.sides, p.side
            ),
            Geometry::Parallelepiped(p) => write!(
                f,
                "Parallelepiped(origin=({:?}, {:?}, {:?}), width={:?}, height={:?}, depth={:?})",
                p.origin.x, p.origin.y, p.origin.z, p.width, p.height, p.depth
            ),
            Geometry::Tetrahedron(t) => write!(
                f,
                "Tetrahedron(center=({:?}, {:?}, {:?}), edge_length={:?})",
                t.center.x, t.center.y, t.center.z, t.edge
            ),
        }
    }
}

/// 点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    position: Point2,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: Point2::new(x, y),
        }
    }

    pub fn position(&self) -> Point2 {
        self.position
    }
}

impl Shape2D for Point {
    fn area(&self) -> Result<f64, ShapeError> {
        Ok(0.0)
    }

    fn perimeter(&self) -> Result<f64, ShapeError> {
        Ok(0.0)
    }
}

/// 线段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    start: Point2,
    end: Point2,
}

impl Line {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> Point2 {
        self.start
    }

    pub fn end(&self) -> Point2 {
        self.end
    }

    /// 计算线段长度
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

impl Shape2D for Line {
    fn area(&self) -> Result<f64, ShapeError> {
        Ok(0.0)
    }

    /// 线段的周长即其长度
    fn perimeter(&self) -> Result<f64, ShapeError> {
        finite("perimeter", self.length())
    }
}

/// 圆
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    pub fn new(center: Point2, radius: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            center,
            radius: positive("radius", radius)?,
        })
    }

    pub fn center(&self) -> Point2 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape2D for Circle {
    fn area(&self) -> Result<f64, ShapeError> {
        finite("area", PI * self.radius * self.radius)
    }

    fn perimeter(&self) -> Result<f64, ShapeError> {
        finite("perimeter", 2.0 * PI * self.radius)
    }
}

/// 正方形（以左下角定位）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Square {
    corner: Point2,
    side: f64,
}

impl Square {
    pub fn new(corner: Point2, side: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            corner,
            side: positive("side_length", side)?,
        })
    }

    pub fn corner(&self) -> Point2 {
        self.corner
    }

    pub fn side(&self) -> f64 {
        self.side
    }

    pub fn top_right(&self) -> Point2 {
        Point2::new(self.corner.x + self.side, self.corner.y + self.side)
    }
}

impl Shape2D for Square {
    fn area(&self) -> Result<f64, ShapeError> {
        finite("area", self.side * self.side)
    }

    fn perimeter(&self) -> Result<f64, ShapeError> {
        finite("perimeter", 4.0 * self.side)
    }
}

/// 矩形（以左下角定位）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    corner: Point2,
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(corner: Point2, width: f64, height: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            corner,
            width: positive("width", width)?,
            height: positive("height", height)?,
        })
    }

    pub fn corner(&self) -> Point2 {
        self.corner
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn top_right(&self) -> Point2 {
        Point2::new(self.corner.x + self.width, self.corner.y + self.height)
    }
}

impl Shape2D for Rectangle {
    fn area(&self) -> Result<f64, ShapeError> {
        finite("area", self.width * self.height)
    }

    fn perimeter(&self) -> Result<f64, ShapeError> {
        finite("perimeter", 2.0 * (self.width + self.height))
    }
}

/// 椭圆
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Oval {
    center: Point2,
    radius_x: f64,
    radius_y: f64,
}

impl Oval {
    pub fn new(center: Point2, radius_x: f64, radius_y: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            center,
            radius_x: positive("radius_x", radius_x)?,
            radius_y: positive("radius_y", radius_y)?,
        })
    }

    pub fn center(&self) -> Point2 {
        self.center
    }

    pub fn radius_x(&self) -> f64 {
        self.radius_x
    }

    pub fn radius_y(&self) -> f64 {
        self.radius_y
    }
}

impl Shape2D for Oval {
    fn area(&self) -> Result<f64, ShapeError> {
        finite("area", PI * self.radius_x * self.radius_y)
    }

    /// Ramanujan 第二近似公式
    fn perimeter(&self) -> Result<f64, ShapeError> {
        let (a, b) = (self.radius_x, self.radius_y);
        let h = ((a - b) / (a + b)).powi(2);
        finite(
            "perimeter",
            PI * (a + b) * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt())),
        )
    }
}

/// 正多边形
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegularPolygon {
    center: Point2,
    sides: u32,
    side: f64,
}

impl RegularPolygon {
    pub fn new(center: Point2, sides: i64, side: f64) -> Result<Self, ShapeError> {
        let sides = u32::try_from(sides)
            .ok()
            .filter(|n| *n >= 3)
            .ok_or(ShapeError::InvalidSideCount(sides))?;

        Ok(Self {
            center,
            sides,
            side: positive("side_length", side)?,
        })
    }

    pub fn center(&self) -> Point2 {
        self.center
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn side(&self) -> f64 {
        self.side
    }

    /// 外接圆半径 R = s / (2·sin(π/n))
    pub fn circumradius(&self) -> f64 {
        self.side / (2.0 * (PI / f64::from(self.sides)).sin())
    }

    /// 边心距 a = R·cos(π/n)
    pub fn apothem(&self) -> f64 {
        self.circumradius() * (PI / f64::from(self.sides)).cos()
    }
}

impl Shape2D for RegularPolygon {
    fn area(&self) -> Result<f64, ShapeError> {
        finite(
            "area",
            0.5 * f64::from(self.sides) * self.side * self.apothem(),
        )
    }

    fn perimeter(&self) -> Result<f64, ShapeError> {
        finite("perimeter", f64::from(self.sides) * self.side)
    }
}

/// 平行六面体（以原点角定位）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parallelepiped {
    origin: Point3,
    width: f64,
    height: f64,
    depth: f64,
}

impl Parallelepiped {
    pub fn new(origin: Point3, width: f64, height: f64, depth: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            origin,
            width: positive("width", width)?,
            height: positive("height", height)?,
            depth: positive("depth", depth)?,
        })
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }
}

impl Shape3D for Parallelepiped {
    fn volume(&self) -> Result<f64, ShapeError> {
        finite("volume", self.width * self.height * self.depth)
    }

    fn surface_area(&self) -> Result<f64, ShapeError> {
        let (w, h, d) = (self.width, self.height, self.depth);
        finite("surface_area", 2.0 * (w * h + w * d + h * d))
    }
}

/// 正四面体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tetrahedron {
    center: Point3,
    edge: f64,
}

impl Tetrahedron {
    pub fn new(center: Point3, edge: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            center,
            edge: positive("edge_length", edge)?,
        })
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn edge(&self) -> f64 {
        self.edge
    }

    /// 高 h = √6·e / 3
    pub fn height(&self) -> f64 {
        6f64.sqrt() * self.edge / 3.0
    }
}

impl Shape3D for Tetrahedron {
    fn volume(&self) -> Result<f64, ShapeError> {
        finite("volume", 2f64.sqrt() / 12.0 * self.edge.powi(3))
    }

    fn surface_area(&self) -> Result<f64, ShapeError> {
        finite("surface_area", 3f64.sqrt() * self.edge * self.edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_point_and_line_metrics() {
        let point = Point::new(10.0, 20.0);
        assert_eq!(point.area().unwrap(), 0.0);
        assert_eq!(point.perimeter().unwrap(), 0.0);

        let line = Line::new(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0));
        assert_eq!(line.area().unwrap(), 0.0);
        assert_close(line.perimeter().unwrap(), 5.0);
    }

    #[test]
    fn test_circle_metrics() {
        let circle = Circle::new(Point2::origin(), 5.0).unwrap();
        assert_close(circle.area().unwrap(), PI * 25.0);
        assert_close(circle.perimeter().unwrap(), 10.0 * PI);
        assert!((circle.area().unwrap() - 78.5398).abs() < 1e-4);
        assert!((circle.perimeter().unwrap() - 31.4159).abs() < 1e-4);
    }

    #[test]
    fn test_square_and_rectangle_metrics() {
        let square = Square::new(Point2::origin(), 3.0).unwrap();
        assert_close(square.area().unwrap(), 9.0);
        assert_close(square.perimeter().unwrap(), 12.0);
        assert_eq!(square.top_right(), Point2::new(3.0, 3.0));

        let rect = Rectangle::new(Point2::new(1.0, 1.0), 4.0, 2.5).unwrap();
        assert_close(rect.area().unwrap(), 10.0);
        assert_close(rect.perimeter().unwrap(), 13.0);
        assert_eq!(rect.top_right(), Point2::new(5.0, 3.5));
    }

    #[test]
    fn test_oval_metrics() {
        let oval = Oval::new(Point2::origin(), 5.0, 3.0).unwrap();
        assert_close(oval.area().unwrap(), PI * 15.0);

        let h: f64 = (2.0 / 8.0_f64).powi(2);
        let expected = PI * 8.0 * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()));
        assert_close(oval.perimeter().unwrap(), expected);

        // 圆退化情形
        let round = Oval::new(Point2::origin(), 2.0, 2.0).unwrap();
        assert_close(round.perimeter().unwrap(), 4.0 * PI);
    }

    #[test]
    fn test_regular_polygon_metrics() {
        let hexagon = RegularPolygon::new(Point2::origin(), 6, 4.0).unwrap();
        assert_close(hexagon.perimeter().unwrap(), 24.0);
        assert!((hexagon.area().unwrap() - 41.5692).abs() < 1e-4);
        assert_close(hexagon.circumradius(), 4.0);
        assert_close(hexagon.apothem(), 2.0 * 3f64.sqrt());

        let square = RegularPolygon::new(Point2::origin(), 4, 2.0).unwrap();
        assert_close(square.area().unwrap(), 4.0);
    }

    #[test]
    fn test_solid_metrics() {
        let box3 = Parallelepiped::new(Point3::origin(), 2.0, 3.0, 4.0).unwrap();
        assert_close(box3.volume().unwrap(), 24.0);
        assert_close(box3.surface_area().unwrap(), 52.0);

        let tetra = Tetrahedron::new(Point3::origin(), 2.0).unwrap();
        assert_close(tetra.volume().unwrap(), 2f64.sqrt() / 12.0 * 8.0);
        assert_close(tetra.surface_area().unwrap(), 3f64.sqrt() * 4.0);
        assert_close(tetra.height(), 6f64.sqrt() * 2.0 / 3.0);
    }

    #[test]
    fn test_non_positive_dimensions_rejected() {
        assert_eq!(
            Circle::new(Point2::origin(), 0.0),
            Err(ShapeError::NonPositive {
                field: "radius",
                value: 0.0
            })
        );
        assert!(Square::new(Point2::origin(), -1.0).is_err());
        assert!(Rectangle::new(Point2::origin(), 1.0, 0.0).is_err());
        assert!(Oval::new(Point2::origin(), -2.0, 1.0).is_err());
        assert!(Parallelepiped::new(Point3::origin(), 1.0, 1.0, -1.0).is_err());
        assert!(Tetrahedron::new(Point3::origin(), 0.0).is_err());
        assert!(Circle::new(Point2::origin(), f64::NAN).is_err());
    }

    #[test]
    fn test_polygon_side_count_rejected() {
        assert_eq!(
            RegularPolygon::new(Point2::origin(), 2, 1.0),
            Err(ShapeError::InvalidSideCount(2))
        );
        assert!(RegularPolygon::new(Point2::origin(), -5, 1.0).is_err());
        assert!(RegularPolygon::new(Point2::origin(), 3, 0.0).is_err());
    }

    #[test]
    fn test_overflow_reports_calculation_error() {
        let circle = Circle::new(Point2::origin(), 1e200).unwrap();
        assert!(matches!(
            circle.area(),
            Err(ShapeError::Calculation { metric: "area", .. })
        ));
        assert!(Geometry::Circle(circle).metrics().is_err());
    }

    #[test]
    fn test_geometry_dimension_and_type() {
        let g = Geometry::Tetrahedron(Tetrahedron::new(Point3::origin(), 1.0).unwrap());
        assert_eq!(g.dimension(), 3);
        assert_eq!(g.type_name(), "Tetrahedron");
        assert!(matches!(g.metrics().unwrap(), Metrics::Solid { .. }));

        let g = Geometry::Point(Point::new(1.0, 2.0));
        assert_eq!(g.dimension(), 2);
        assert_eq!(g.type_name(), "Point");
    }

    #[test]
    fn test_display() {
        let line = Geometry::Line(Line::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)));
        assert_eq!(line.to_string(), "Line((0.0, 0.0), (1.0, 1.0)), Length: 1.41");

        let circle = Geometry::Circle(Circle::new(Point2::new(0.0, 0.0), 5.0).unwrap());
        assert_eq!(circle.to_string(), "Circle(center=(0.0, 0.0), radius=5.0)");
    }

    #[test]
    fn test_specific_info_fields() {
        let line = Geometry::Line(Line::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)));
        let info = line.specific_info();
        assert_eq!(info["start_point"], json!({ "x": 0.0, "y": 0.0 }));
        assert_eq!(info["end_point"], json!({ "x": 1.0, "y": 1.0 }));
        // 结构化记录保留完整精度
        assert_eq!(info["length"], json!(2f64.sqrt()));

        let polygon = Geometry::RegularPolygon(
            RegularPolygon::new(Point2::new(1.0, 2.0), 6, 4.0).unwrap(),
        );
        let info = polygon.specific_info();
        assert_eq!(info["num_sides"], json!(6));
        assert_eq!(info["center"], json!({ "x": 1.0, "y": 2.0 }));
        assert!(info.contains_key("apothem"));
    }
}
