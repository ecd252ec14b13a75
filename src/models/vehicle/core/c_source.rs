//! C translation unit for a showcase.
//!
//! The generated program declares the `Engine` and `Car` structs, defines the
//! `myEngine` and `MySuperCar` globals, and prints the same four lines as
//! [`Report`](super::Report).

use std::fmt::{self, Display, Formatter};

use super::{Engine, Showcase};

/// Field type of a generated struct member.
#[derive(Debug, Clone, Copy)]
enum CType {
    I32,
    F32,
    Str,
    Record(&'static str),
}

impl CType {
    fn c_name(self) -> &'static str {
        match self {
            Self::I32 => "int",
            Self::F32 => "float",
            Self::Str => "char*",
            Self::Record(name) => name,
        }
    }
}

const ENGINE_FIELDS: &[(&str, CType)] = &[("horsepower", CType::I32), ("torque", CType::F32)];

const CAR_FIELDS: &[(&str, CType)] = &[
    ("maxSpeed", CType::I32),
    ("weight", CType::I32),
    ("engine", CType::Record("Engine")),
    ("color", CType::Str),
];

const MAIN: &str = r#"int main() {
    float result = myEngine.horsepower + myEngine.torque;
    printf("result = %.2f\n", result);

    printf("horsepower = %d\n", myEngine.horsepower);
    printf("torque = %.2f\n", myEngine.torque);

    printf("Car: %s, maxSpeed=%d, weight=%d\n",
           MySuperCar.color, MySuperCar.maxSpeed, MySuperCar.weight);

    return 0;
}
"#;

impl Showcase {
    /// Renders the showcase as a standalone C program.
    ///
    /// Float literals always carry a decimal point and an `f` suffix, and
    /// string literals are escaped. Non-finite floats are not representable
    /// as C literals and are emitted as-is.
    #[must_use]
    pub fn c_source(&self) -> String {
        CSource(self).to_string()
    }
}

struct CSource<'a>(&'a Showcase);

impl Display for CSource<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Showcase { engine, car } = self.0;

        writeln!(f, "#include <stdio.h>")?;
        writeln!(f)?;
        writeln!(f, "// ----------- struct declaration ------------")?;
        write_struct(f, "Engine", ENGINE_FIELDS)?;
        writeln!(f)?;
        write_struct(f, "Car", CAR_FIELDS)?;
        writeln!(f)?;

        writeln!(f, "// ----------- instances ---------------------")?;
        writeln!(f, "Engine myEngine = {{")?;
        writeln!(f, "    .horsepower = {},", engine.horsepower)?;
        writeln!(f, "    .torque = {}", FloatLiteral(engine.torque))?;
        writeln!(f, "}};")?;
        writeln!(f)?;
        writeln!(f, "Car MySuperCar = {{")?;
        writeln!(f, "    .maxSpeed = {},", car.max_speed)?;
        writeln!(f, "    .weight   = {},", car.weight)?;
        writeln!(f, "    .engine   = {},", EngineInitializer(&car.engine))?;
        writeln!(f, "    .color    = {}", StringLiteral(&car.color))?;
        writeln!(f, "}};")?;
        writeln!(f)?;

        writeln!(f, "// ----------- functions ---------------------")?;
        f.write_str(MAIN)
    }
}

fn write_struct(f: &mut Formatter<'_>, name: &str, fields: &[(&str, CType)]) -> fmt::Result {
    writeln!(f, "typedef struct {{")?;
    for (field, ty) in fields {
        writeln!(f, "    {} {field};", ty.c_name())?;
    }
    writeln!(f, "}} {name};")
}

struct EngineInitializer<'a>(&'a Engine);

impl Display for EngineInitializer<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ .horsepower = {}, .torque = {} }}",
            self.0.horsepower,
            FloatLiteral(self.0.torque)
        )
    }
}

struct FloatLiteral(f32);

impl Display for FloatLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // `Debug` keeps the decimal point on whole numbers.
        write!(f, "{:?}f", self.0)
    }
}

struct StringLiteral<'a>(&'a str);

impl Display for StringLiteral<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.0.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                c => write!(f, "{c}")?,
            }
        }
        f.write_str("\"")
    }
}
