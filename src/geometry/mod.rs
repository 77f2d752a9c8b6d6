/// 几何体加载和处理模块
///
/// 提供 3D 模型导入功能与导入结果的数据结构。
///
/// # 模块结构
///
/// - `vertex`: 顶点数据结构定义
/// - `mesh`: 子网格
/// - `material`: 材质
/// - `bounds`: 轴对齐包围盒
/// - `model`: 模型（子网格 + 材质 + 包围盒）
/// - `loaders`: 各种格式的模型加载器
///
/// # 架构设计
///
/// ```text
/// 文件 (OBJ + MTL)
///     ↓
/// Loader (ObjLoader)
///     ↓
/// Model (CPU侧数据)
///     ↓
/// 渲染器 (只读使用，上传到GPU)
/// ```
///
/// # 使用示例
///
/// ```rust,no_run
/// use meshview::geometry::loaders::{ModelLoader, ObjLoader};
/// use std::path::Path;
///
/// let model = ObjLoader::new().load_from_file(Path::new("model.obj"))?;
///
/// println!("顶点数: {}", model.total_vertex_count());
/// println!("包围盒: {:?} - {:?}", model.bounds.min, model.bounds.max);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```

pub mod bounds;
pub mod loaders;
pub mod material;
pub mod mesh;
pub mod model;
pub mod vertex;

// 重新导出常用类型
pub use bounds::Bounds;
pub use material::Material;
pub use mesh::Mesh;
pub use model::Model;
pub use vertex::Vertex;
