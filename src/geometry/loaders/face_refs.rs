/// OBJ 面引用预处理
///
/// tobj 遇到越界的面引用会直接返回错误，而导入规则要求越界的位置/法线/纹理坐标
/// 得到零向量。这里在交给 tobj 之前扫描一遍文本：越界引用被改写为指向插入在文件开头的
/// 零值元素，其余引用改写为对应的绝对下标。所有引用都有效时原文不变。
use std::borrow::Cow;
use std::fmt::Write;

/// 扫描到当前行为止的 v / vt / vn 数量
#[derive(Debug, Default, Clone, Copy)]
struct Counts {
    positions: usize,
    texcoords: usize,
    normals: usize,
}

/// 面上一个角的某一项引用
#[derive(Debug, Clone, Copy, PartialEq)]
enum Slot {
    /// 未写出（如 `1//3` 中的纹理坐标）
    Missing,
    /// 0 起始的下标
    Valid(usize),
    OutOfRange,
}

impl Slot {
    /// 写出 1 起始的下标；越界引用指向开头插入的零值元素
    fn render(self, output: &mut String, shift: usize) {
        match self {
            Slot::Missing => {}
            Slot::Valid(index) => {
                let _ = write!(output, "{}", index + 1 + shift);
            }
            Slot::OutOfRange => output.push('1'),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Corner {
    position: Slot,
    texcoord: Slot,
    normal: Slot,
}

/// 改写越界的面引用
///
/// 负数下标相对于该行之前出现的元素数量解析，与 OBJ 的相对引用一致。
/// 无法解析的面行保持原样，交给 tobj 报告解析错误。
///
/// 插入的纹理坐标在 `flip_uvs` 开启时写为 `(0, 1)`，翻转后恰好为 `(0, 0)`。
pub(super) fn sanitize_face_references(source: &str, flip_uvs: bool) -> Cow<'_, str> {
    let mut counts = Counts::default();
    let mut faces: Vec<(usize, Vec<Corner>)> = Vec::new();
    let mut colored = false;

    for (line_no, line) in source.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => {
                if counts.positions == 0 {
                    colored = tokens.count() >= 6;
                }
                counts.positions += 1;
            }
            Some("vt") => counts.texcoords += 1,
            Some("vn") => counts.normals += 1,
            Some("f") => {
                let corners: Option<Vec<Corner>> =
                    tokens.map(|token| parse_corner(token, counts)).collect();
                if let Some(corners) = corners {
                    faces.push((line_no, corners));
                }
            }
            _ => {}
        }
    }

    let out_of_range = |slot: fn(&Corner) -> Slot| {
        faces
            .iter()
            .flat_map(|(_, corners)| corners.iter())
            .any(|corner| slot(corner) == Slot::OutOfRange)
    };
    let shift = Counts {
        positions: usize::from(out_of_range(|c| c.position)),
        texcoords: usize::from(out_of_range(|c| c.texcoord)),
        normals: usize::from(out_of_range(|c| c.normal)),
    };

    if shift.positions + shift.texcoords + shift.normals == 0 {
        return Cow::Borrowed(source);
    }

    let mut output = String::with_capacity(source.len() + 64);
    if shift.positions > 0 {
        output.push_str(if colored { "v 0 0 0 0 0 0\n" } else { "v 0 0 0\n" });
    }
    if shift.texcoords > 0 {
        output.push_str(if flip_uvs { "vt 0 1\n" } else { "vt 0 0\n" });
    }
    if shift.normals > 0 {
        output.push_str("vn 0 0 0\n");
    }

    let mut faces = faces.into_iter().peekable();
    for (line_no, line) in source.lines().enumerate() {
        match faces.next_if(|(face_line, _)| *face_line == line_no) {
            Some((_, corners)) => write_face(&mut output, &corners, shift),
            None => output.push_str(line),
        }
        output.push('\n');
    }

    Cow::Owned(output)
}

/// 解析 `v`、`v/vt`、`v//vn` 或 `v/vt/vn` 形式的一个角
fn parse_corner(token: &str, counts: Counts) -> Option<Corner> {
    let mut split = token.split('/');
    let position = resolve_index(split.next()?, counts.positions)?;

    let texcoord = match split.next() {
        Some(value) if !value.is_empty() => resolve_index(value, counts.texcoords)?,
        _ => Slot::Missing,
    };

    let normal = match split.next() {
        Some(value) if !value.is_empty() => resolve_index(value, counts.normals)?,
        _ => Slot::Missing,
    };

    if split.next().is_some() {
        return None;
    }

    Some(Corner { position, texcoord, normal })
}

/// 不是整数时返回 `None`；0 与越界下标都视为越界
fn resolve_index(token: &str, len: usize) -> Option<Slot> {
    let raw = token.parse::<i64>().ok()?;
    let index = if raw > 0 { raw - 1 } else { len as i64 + raw };

    if raw == 0 || index < 0 || index as usize >= len {
        Some(Slot::OutOfRange)
    } else {
        Some(Slot::Valid(index as usize))
    }
}

fn write_face(output: &mut String, corners: &[Corner], shift: Counts) {
    output.push('f');
    for corner in corners {
        output.push(' ');
        corner.position.render(output, shift.positions);

        if corner.texcoord != Slot::Missing || corner.normal != Slot::Missing {
            output.push('/');
            corner.texcoord.render(output, shift.texcoords);
        }
        if corner.normal != Slot::Missing {
            output.push('/');
            corner.normal.render(output, shift.normals);
        }
    }
}
