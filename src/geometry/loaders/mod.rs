/// 模型加载器模块
///
/// 提供统一的模型导入接口和具体格式的实现。
///
/// # 支持的格式
///
/// - **OBJ**: Wavefront OBJ + MTL 材质库（使用 tobj crate 解析）
///
/// # 使用示例
///
/// ```rust,no_run
/// use meshview::geometry::loaders::{ImportOptions, ModelLoader, ObjLoader};
/// use std::path::Path;
///
/// let loader = ObjLoader::with_options(ImportOptions {
///     flip_uvs: true,
///     ..ImportOptions::default()
/// });
/// let model = loader.load_from_file(Path::new("model.obj"))?;
/// # Ok::<(), meshview::core::ImportError>(())
/// ```
use crate::core::config::ImportConfig;
use crate::core::error::{ImportError, ImportResult};
use crate::geometry::model::Model;
use std::path::Path;

mod face_refs;
pub mod obj_loader;

// 重新导出加载器
pub use obj_loader::ObjLoader;

/// 导入选项
///
/// 在导入前设置，对同一个加载器实例之后的所有导入生效。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOptions {
    /// 子网格没有任何非零法线时重建法线（默认开启）
    pub generate_normals: bool,

    /// 计算切线（默认关闭）
    pub generate_tangents: bool,

    /// 翻转纹理坐标：`v' = 1 - v`（默认关闭）
    pub flip_uvs: bool,

    /// 合并完全相同的顶点（默认关闭，保持每个面 3 个独立顶点）
    pub weld_vertices: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            generate_normals: true,
            generate_tangents: false,
            flip_uvs: false,
            weld_vertices: false,
        }
    }
}

impl From<&ImportConfig> for ImportOptions {
    fn from(config: &ImportConfig) -> Self {
        Self {
            generate_normals: config.generate_normals,
            generate_tangents: config.generate_tangents,
            flip_uvs: config.flip_uvs,
            weld_vertices: config.weld_vertices,
        }
    }
}

/// 模型加载器 trait
///
/// 所有格式的加载器都实现此 trait。加载器持有自己的 [`ImportOptions`]，
/// 每次调用都返回独立的结果，不保留任何跨调用状态。
pub trait ModelLoader {
    /// 从文件路径导入模型
    ///
    /// # 错误
    ///
    /// - 文件不存在或无法读取
    /// - 文件无法解析
    ///
    /// 单个面或顶点的异常不会导致失败。
    fn load_from_file(&self, path: &Path) -> ImportResult<Model>;

    /// 从内存数据导入模型
    ///
    /// 外部引用（如材质库）相对于当前工作目录解析。
    fn load_from_memory(&self, data: &[u8]) -> ImportResult<Model>;

    /// 支持的文件扩展名列表（小写，不含点号）
    fn supported_extensions(&self) -> &'static [&'static str];

    /// 按顺序导入多个文件
    ///
    /// 遇到第一个失败即停止，错误中带有失败的路径；失败时不返回部分结果。
    fn load_batch(&self, paths: &[&Path]) -> ImportResult<Vec<Model>> {
        let mut models = Vec::with_capacity(paths.len());

        for path in paths {
            let model = self.load_from_file(path).map_err(|source| ImportError::Batch {
                path: path.to_path_buf(),
                source: Box::new(source),
            })?;
            models.push(model);
        }

        Ok(models)
    }
}

/// 根据文件扩展名选择合适的加载器
///
/// # 示例
///
/// ```rust,no_run
/// use meshview::geometry::loaders::{load_model, ImportOptions};
/// use std::path::Path;
///
/// let model = load_model(Path::new("model.obj"), ImportOptions::default())?;
/// # Ok::<(), meshview::core::ImportError>(())
/// ```
pub fn load_model(path: &Path, options: ImportOptions) -> ImportResult<Model> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| {
            ImportError::UnsupportedFormat(format!("无法确定文件扩展名: {}", path.display()))
        })?;

    let loader = ObjLoader::with_options(options);
    if loader.supported_extensions().contains(&extension.as_str()) {
        loader.load_from_file(path)
    } else {
        Err(ImportError::UnsupportedFormat(format!(
            "不支持的文件格式: .{}",
            extension
        )))
    }
}
