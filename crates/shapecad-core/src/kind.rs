//! 图形类型目录
//!
//! 每个类型关键字对应一组位置参数和一个构造函数。

use crate::entity::ShapeId;
use crate::error::ShapeError;
use crate::geometry::{
    Circle, Geometry, Line, Oval, Parallelepiped, Point, Rectangle, RegularPolygon, Square,
    Tetrahedron,
};
use crate::input_parser::{InputParser, InputValue, ParseError};
use crate::math::{Point2, Point3};

/// 参数类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Real,
    Count,
}

/// 参数描述
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
}

const fn real(name: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        kind: ParamKind::Real,
    }
}

const fn count(name: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        kind: ParamKind::Count,
    }
}

const POINT_PARAMS: &[ParamSpec] = &[real("x"), real("y")];
const LINE_PARAMS: &[ParamSpec] = &[real("x1"), real("y1"), real("x2"), real("y2")];
const CIRCLE_PARAMS: &[ParamSpec] = &[real("center_x"), real("center_y"), real("radius")];
const SQUARE_PARAMS: &[ParamSpec] = &[real("x"), real("y"), real("side_length")];
const RECTANGLE_PARAMS: &[ParamSpec] = &[real("x"), real("y"), real("width"), real("height")];
const OVAL_PARAMS: &[ParamSpec] = &[
    real("center_x"),
    real("center_y"),
    real("radius_x"),
    real("radius_y"),
];
const POLYGON_PARAMS: &[ParamSpec] = &[
    real("center_x"),
    real("center_y"),
    count("num_sides"),
    real("side_length"),
];
const PARALLELEPIPED_PARAMS: &[ParamSpec] = &[
    real("x"),
    real("y"),
    real("z"),
    real("width"),
    real("height"),
    real("depth"),
];
const TETRAHEDRON_PARAMS: &[ParamSpec] = &[real("x"), real("y"), real("z"), real("edge_length")];

/// 可创建的图形类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Point,
    Line,
    Circle,
    Square,
    Rectangle,
    Oval,
    Polygon,
    Parallelepiped,
    Tetrahedron,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 9] = [
        ShapeKind::Point,
        ShapeKind::Line,
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Rectangle,
        ShapeKind::Oval,
        ShapeKind::Polygon,
        ShapeKind::Parallelepiped,
        ShapeKind::Tetrahedron,
    ];

    /// 按关键字查找（不区分大小写）
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.keyword().eq_ignore_ascii_case(keyword))
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            ShapeKind::Point => "point",
            ShapeKind::Line => "line",
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Oval => "oval",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Parallelepiped => "parallelepiped",
            ShapeKind::Tetrahedron => "tetrahedron",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ShapeKind::Point => "Create a point",
            ShapeKind::Line => "Create a line segment",
            ShapeKind::Circle => "Create a circle",
            ShapeKind::Square => "Create a square",
            ShapeKind::Rectangle => "Create a rectangle",
            ShapeKind::Oval => "Create an oval",
            ShapeKind::Polygon => "Create a regular polygon",
            ShapeKind::Parallelepiped => "Create a parallelepiped",
            ShapeKind::Tetrahedron => "Create a tetrahedron",
        }
    }

    /// 位置参数列表
    pub fn params(&self) -> &'static [ParamSpec] {
        match self {
            ShapeKind::Point => POINT_PARAMS,
            ShapeKind::Line => LINE_PARAMS,
            ShapeKind::Circle => CIRCLE_PARAMS,
            ShapeKind::Square => SQUARE_PARAMS,
            ShapeKind::Rectangle => RECTANGLE_PARAMS,
            ShapeKind::Oval => OVAL_PARAMS,
            ShapeKind::Polygon => POLYGON_PARAMS,
            ShapeKind::Parallelepiped => PARALLELEPIPED_PARAMS,
            ShapeKind::Tetrahedron => TETRAHEDRON_PARAMS,
        }
    }

    /// 必需的位置参数个数
    pub fn arity(&self) -> usize {
        self.params().len()
    }

    /// 用法字符串，如 `create circle center_x center_y radius [name]`
    pub fn usage(&self) -> String {
        let params: Vec<&str> = self.params().iter().map(|p| p.name).collect();
        format!("create {} {} [name]", self.keyword(), params.join(" "))
    }

    /// 默认名称：首字母大写的类型关键字 + 即将分配的标识符
    pub fn default_name(&self, id: ShapeId) -> String {
        let keyword = self.keyword();
        let mut chars = keyword.chars();
        let capitalized = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
            None => String::new(),
        };
        format!("{} {}", capitalized, id)
    }

    /// 解析位置参数
    ///
    /// 只解析前 `arity()` 个词元，调用方负责检查数量是否足够。
    pub fn parse_values(&self, tokens: &[&str]) -> Result<Vec<InputValue>, ParseError> {
        self.params()
            .iter()
            .zip(tokens)
            .map(|(spec, token)| match spec.kind {
                ParamKind::Real => InputParser::parse_real(token, spec.name).map(InputValue::Real),
                ParamKind::Count => {
                    InputParser::parse_count(token, spec.name).map(InputValue::Count)
                }
            })
            .collect()
    }

    /// 构造几何数据
    pub fn build(&self, values: &[InputValue]) -> Result<Geometry, ShapeError> {
        let arg = |index: usize| -> Result<f64, ShapeError> {
            match values.get(index) {
                Some(InputValue::Real(v)) => Ok(*v),
                Some(InputValue::Count(n)) => Ok(*n as f64),
                None => Err(ShapeError::MissingParameter {
                    kind: self.keyword(),
                    index,
                }),
            }
        };

        let geometry = match self {
            ShapeKind::Point => Geometry::Point(Point::new(arg(0)?, arg(1)?)),
            ShapeKind::Line => Geometry::Line(Line::new(
                Point2::new(arg(0)?, arg(1)?),
                Point2::new(arg(2)?, arg(3)?),
            )),
            ShapeKind::Circle => {
                Geometry::Circle(Circle::new(Point2::new(arg(0)?, arg(1)?), arg(2)?)?)
            }
            ShapeKind::Square => {
                Geometry::Square(Square::new(Point2::new(arg(0)?, arg(1)?), arg(2)?)?)
            }
            ShapeKind::Rectangle => Geometry::Rectangle(Rectangle::new(
                Point2::new(arg(0)?, arg(1)?),
                arg(2)?,
                arg(3)?,
            )?),
            ShapeKind::Oval => Geometry::Oval(Oval::new(
                Point2::new(arg(0)?, arg(1)?),
                arg(2)?,
                arg(3)?,
            )?),
            ShapeKind::Polygon => {
                let sides = match values.get(2) {
                    Some(InputValue::Count(n)) => *n,
                    _ => {
                        return Err(ShapeError::MissingParameter {
                            kind: self.keyword(),
                            index: 2,
                        })
                    }
                };
                Geometry::RegularPolygon(RegularPolygon::new(
                    Point2::new(arg(0)?, arg(1)?),
                    sides,
                    arg(3)?,
                )?)
            }
            ShapeKind::Parallelepiped => Geometry::Parallelepiped(Parallelepiped::new(
                Point3::new(arg(0)?, arg(1)?, arg(2)?),
                arg(3)?,
                arg(4)?,
                arg(5)?,
            )?),
            ShapeKind::Tetrahedron => Geometry::Tetrahedron(Tetrahedron::new(
                Point3::new(arg(0)?, arg(1)?, arg(2)?),
                arg(3)?,
            )?),
        };

        Ok(geometry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_table() {
        let expected = [
            ("point", 2),
            ("line", 4),
            ("circle", 3),
            ("square", 3),
            ("rectangle", 4),
            ("oval", 4),
            ("polygon", 4),
            ("parallelepiped", 6),
            ("tetrahedron", 4),
        ];
        for (keyword, arity) in expected {
            let kind = ShapeKind::from_keyword(keyword).unwrap();
            assert_eq!(kind.arity(), arity, "{keyword}");
        }
    }

    #[test]
    fn test_from_keyword_case_insensitive() {
        assert_eq!(ShapeKind::from_keyword("CIRCLE"), Some(ShapeKind::Circle));
        assert_eq!(ShapeKind::from_keyword("Polygon"), Some(ShapeKind::Polygon));
        assert_eq!(ShapeKind::from_keyword("hexagon"), None);
    }

    #[test]
    fn test_default_name() {
        assert_eq!(ShapeKind::Circle.default_name(ShapeId::new(3)), "Circle 3");
        assert_eq!(
            ShapeKind::Parallelepiped.default_name(ShapeId::new(12)),
            "Parallelepiped 12"
        );
    }

    #[test]
    fn test_usage() {
        assert_eq!(
            ShapeKind::Polygon.usage(),
            "create polygon center_x center_y num_sides side_length [name]"
        );
    }

    #[test]
    fn test_polygon_sides_parse_as_integer() {
        let values = ShapeKind::Polygon
            .parse_values(&["0", "0", "6", "4"])
            .unwrap();
        assert_eq!(values[2], InputValue::Count(6));
        assert_eq!(values[3], InputValue::Real(4.0));

        let err = ShapeKind::Polygon
            .parse_values(&["0", "0", "6.5", "4"])
            .unwrap_err();
        assert!(matches!(err, ParseError::InvalidInteger { .. }));
    }

    #[test]
    fn test_build() {
        let values = ShapeKind::Circle.parse_values(&["1", "2", "5"]).unwrap();
        let geometry = ShapeKind::Circle.build(&values).unwrap();
        assert_eq!(geometry.type_name(), "Circle");

        let values = ShapeKind::Square.parse_values(&["0", "0", "-1"]).unwrap();
        assert!(matches!(
            ShapeKind::Square.build(&values),
            Err(ShapeError::NonPositive { .. })
        ));

        let values = ShapeKind::Polygon
            .parse_values(&["0", "0", "2", "1"])
            .unwrap();
        assert_eq!(
            ShapeKind::Polygon.build(&values),
            Err(ShapeError::InvalidSideCount(2))
        );
    }

    #[test]
    fn test_build_missing_parameter() {
        assert!(matches!(
            ShapeKind::Line.build(&[InputValue::Real(1.0)]),
            Err(ShapeError::MissingParameter { kind: "line", .. })
        ));
    }
}
