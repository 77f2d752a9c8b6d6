/// OBJ 文件加载器
///
/// 使用 tobj crate 解析 Wavefront OBJ 与 MTL 文件，
/// 再按导入规则构建 `Model`：只接受三角形面、每个面生成 3 个独立顶点、
/// 按需重建法线与切线。
use super::face_refs::sanitize_face_references;
use super::{ImportOptions, ModelLoader};
use crate::core::error::{ImportError, ImportResult};
use crate::geometry::material::Material;
use crate::geometry::mesh::Mesh;
use crate::geometry::model::Model;
use crate::geometry::vertex::Vertex;
use crate::{import_debug, import_info, import_warn};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// OBJ 格式加载器
///
/// # 特性
///
/// - 材质库（mtllib）相对于 OBJ 文件所在目录解析
/// - 非三角形面被跳过（记录警告），不做三角化
/// - 越界的位置/法线/纹理坐标索引得到零向量，不会导致导入失败
/// - 同一形状内切换材质（usemtl）不会拆分子网格，材质取第一个面的
/// - 子网格完全没有法线时重建法线
/// - 可选的切线计算、V 轴翻转与顶点焊接
///
/// # 使用示例
///
/// ```rust,no_run
/// use meshview::geometry::loaders::{ModelLoader, ObjLoader};
/// use std::path::Path;
///
/// let mut loader = ObjLoader::new();
/// loader.set_generate_tangents(true);
///
/// let model = loader.load_from_file(Path::new("model.obj"))?;
/// println!("加载了 {} 个顶点", model.total_vertex_count());
/// # Ok::<(), meshview::core::ImportError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjLoader {
    options: ImportOptions,
}

impl ObjLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ImportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    pub fn set_generate_normals(&mut self, enable: bool) {
        self.options.generate_normals = enable;
    }

    pub fn set_generate_tangents(&mut self, enable: bool) {
        self.options.generate_tangents = enable;
    }

    pub fn set_flip_uvs(&mut self, enable: bool) {
        self.options.flip_uvs = enable;
    }

    pub fn set_weld_vertices(&mut self, enable: bool) {
        self.options.weld_vertices = enable;
    }

    /// 导入模型并用指定材质替换源文件中的全部材质
    ///
    /// 所有子网格都指向 0 号（即唯一的）材质。
    pub fn load_with_material(&self, path: &Path, material: Material) -> ImportResult<Model> {
        let mut model = self.load_from_file(path)?;

        model.materials = vec![material];
        for mesh in &mut model.meshes {
            mesh.material_index = Some(0);
        }

        Ok(model)
    }

    /// 从任意 `BufRead` 导入
    ///
    /// # 参数
    ///
    /// - `reader`: OBJ 文本
    /// - `name`: 模型名称，同时用于错误信息
    /// - `base_dir`: 材质库的查找目录
    pub fn load_from_reader<R: BufRead>(
        &self,
        reader: &mut R,
        name: &str,
        base_dir: &Path,
    ) -> ImportResult<Model> {
        let load_options = tobj::LoadOptions {
            triangulate: false,  // 非三角形面由导入规则丢弃，不做三角化
            single_index: false, // 位置/法线/纹理坐标保留各自的索引流
            ignore_points: true,
            ignore_lines: true,
            ..Default::default()
        };

        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|source| ImportError::Io {
                path: PathBuf::from(name),
                source,
            })?;
        let text = sanitize_face_references(&text, self.options.flip_uvs);

        let mut bytes = text.as_bytes();
        let (shapes, materials) = tobj::load_obj_buf(&mut bytes, &load_options, |mtl_path| {
            let full_path = base_dir.join(mtl_path);
            import_debug!(path = %full_path.display(), "加载材质库");
            tobj::load_mtl(full_path)
        })
        .map_err(|e| ImportError::Parse {
            path: PathBuf::from(name),
            message: e.to_string(),
        })?;

        // 材质库缺失或损坏属于软异常
        let materials = materials.unwrap_or_else(|e| {
            import_warn!(model = name, error = %e, "材质库加载失败，使用默认材质");
            Vec::new()
        });

        let model = self.build_model(name, &shapes, &materials);

        import_info!(
            "成功加载 OBJ 文件 {}: {} 个顶点, {} 个三角形, {} 个子网格, {} 个材质",
            name,
            model.total_vertex_count(),
            model.total_triangle_count(),
            model.meshes.len(),
            model.materials.len()
        );

        Ok(model)
    }

    fn build_model(&self, name: &str, shapes: &[tobj::Model], materials: &[tobj::Material]) -> Model {
        let mut model = Model::new(name);

        model.materials = materials.iter().map(convert_material).collect();
        if model.materials.is_empty() {
            model.materials.push(Material::default());
        }

        // tobj 在每次 usemtl 处切分形状，相邻同名的片段属于同一个形状
        for pieces in shapes.chunk_by(|a, b| a.name == b.name) {
            let mesh = self.convert_shape(pieces, materials.len());
            model.meshes.push(mesh);
        }

        model.compute_bounds();
        model
    }

    /// 将一个形状的所有片段转换为一个子网格
    ///
    /// 材质取第一个片段（即第一个面）的材质，各片段的面按顺序追加。
    fn convert_shape(&self, pieces: &[tobj::Model], material_count: usize) -> Mesh {
        let Some(first) = pieces.first() else {
            return Mesh::new();
        };

        let mut mesh = Mesh::with_name(shape_name(&first.name));
        mesh.material_index = Some(resolve_material_index(first.mesh.material_id, material_count));

        let skipped: usize = pieces
            .iter()
            .map(|piece| self.append_faces(&mut mesh, &piece.mesh))
            .sum();

        if skipped > 0 {
            import_warn!(mesh = %mesh.name, skipped, "子网格中有非三角形面被丢弃");
        }

        if self.options.generate_normals && !mesh.has_normals() {
            import_debug!(mesh = %mesh.name, "子网格缺少法线数据，正在重建...");
            mesh.compute_normals();
        }

        if self.options.generate_tangents {
            mesh.compute_tangents();
        }

        if self.options.weld_vertices {
            mesh.weld();
        }

        debug_assert!(mesh.validate().is_ok());
        mesh
    }

    /// 追加一个片段中的三角形面，返回被跳过的面数
    fn append_faces(&self, mesh: &mut Mesh, source: &tobj::Mesh) -> usize {
        // face_arities 为空表示全部是三角形
        let arities: Vec<usize> = if source.face_arities.is_empty() {
            vec![3; source.indices.len() / 3]
        } else {
            source.face_arities.iter().map(|&a| a as usize).collect()
        };

        mesh.vertices.reserve(source.indices.len());
        mesh.indices.reserve(source.indices.len());

        let mut slot = 0;
        let mut skipped = 0;
        for (face, arity) in arities.into_iter().enumerate() {
            if arity != 3 {
                import_warn!(mesh = %mesh.name, face, arity, "跳过非三角形面");
                slot += arity;
                skipped += 1;
                continue;
            }

            let corners = [0, 1, 2].map(|corner| self.resolve_vertex(source, slot + corner));
            mesh.push_triangle(corners);
            slot += 3;
        }

        skipped
    }

    /// 解析面上一个角的顶点属性
    ///
    /// `slot` 是该角在索引流中的位置。任何缺失或越界的引用都得到零向量。
    fn resolve_vertex(&self, source: &tobj::Mesh, slot: usize) -> Vertex {
        let position = source
            .indices
            .get(slot)
            .and_then(|&i| lookup3(&source.positions, i))
            .unwrap_or_default();

        let normal = source
            .normal_indices
            .get(slot)
            .and_then(|&i| lookup3(&source.normals, i))
            .unwrap_or_default();

        let texcoord = source
            .texcoord_indices
            .get(slot)
            .and_then(|&i| lookup2(&source.texcoords, i))
            .map(|[u, v]| if self.options.flip_uvs { [u, 1.0 - v] } else { [u, v] })
            .unwrap_or_default();

        Vertex::new(position, normal, texcoord, [0.0; 3])
    }
}

impl ModelLoader for ObjLoader {
    fn load_from_file(&self, path: &Path) -> ImportResult<Model> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.to_path_buf()));
        }

        let file = File::open(path).map_err(|source| ImportError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        // 材质库查找目录：OBJ 文件所在目录（没有目录部分时为空）
        let base_dir = path.parent().unwrap_or(Path::new(""));

        let mut reader = BufReader::new(file);
        self.load_from_reader(&mut reader, &path.to_string_lossy(), base_dir)
    }

    fn load_from_memory(&self, data: &[u8]) -> ImportResult<Model> {
        let mut reader = data;
        self.load_from_reader(&mut reader, "<memory>", Path::new(""))
    }

    fn supported_extensions(&self) -> &'static [&'static str] {
        &["obj"]
    }
}

/// 将 tobj 材质转换为引擎材质
///
/// 源文件未设置的参数保持引擎默认值；贴图名为空时视为没有贴图。
fn convert_material(source: &tobj::Material) -> Material {
    let defaults = Material::default();
    let texture = |name: Option<&String>| name.filter(|n| !n.is_empty()).cloned();
    let param = |key: &str| texture(source.unknown_param.get(key));

    Material {
        name: source.name.clone(),
        ambient: source.ambient.unwrap_or(defaults.ambient),
        diffuse: source.diffuse.unwrap_or(defaults.diffuse),
        specular: source.specular.unwrap_or(defaults.specular),
        shininess: source.shininess.unwrap_or(defaults.shininess),
        transparency: source.dissolve.unwrap_or(defaults.transparency),
        refractive_index: source.optical_density.unwrap_or(defaults.refractive_index),
        diffuse_texture: texture(source.diffuse_texture.as_ref()),
        // norm 优先，其次 map_Bump / bump
        normal_texture: param("norm")
            .or_else(|| texture(source.normal_texture.as_ref()))
            .or_else(|| param("bump")),
        specular_texture: texture(source.specular_texture.as_ref()),
    }
}

/// tobj 给没有 o/g 名称的形状起的名字
const UNNAMED_SHAPE: &str = "unnamed_object";

/// 没有名称的形状对应空的子网格名
fn shape_name(name: &str) -> String {
    if name == UNNAMED_SHAPE {
        String::new()
    } else {
        name.to_string()
    }
}

/// 形状的材质下标；缺失或越界时回退到 0
fn resolve_material_index(material_id: Option<usize>, material_count: usize) -> usize {
    match material_id {
        Some(id) if id < material_count => id,
        _ => 0,
    }
}

#[inline]
fn lookup3(pool: &[f32], index: u32) -> Option<[f32; 3]> {
    let start = index as usize * 3;
    pool.get(start..start + 3).map(|c| [c[0], c[1], c[2]])
}

#[inline]
fn lookup2(pool: &[f32], index: u32) -> Option<[f32; 2]> {
    let start = index as usize * 2;
    pool.get(start..start + 2).map(|c| [c[0], c[1]])
}
