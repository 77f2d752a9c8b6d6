//! MeshView - OBJ 模型导入核心
//!
//! 将 Wavefront OBJ（及其 MTL 材质库）转换为渲染器可直接使用的 `Model`：
//! 子网格、材质、逐顶点属性（位置、法线、纹理坐标、切线）以及包围盒。
//! 源数据缺少法线或切线时按配置重建。
//!
//! # 模块结构
//!
//! - `core`: 核心功能模块（日志、配置、错误处理、模型库）
//! - `geometry`: 几何体模块（顶点、网格、材质、模型、OBJ加载器）
//! - `math`: 数学库（nalgebra 类型别名、法线/切线计算）
//!
//! # 使用示例
//!
//! ```no_run
//! use meshview::geometry::loaders::{ModelLoader, ObjLoader};
//! use std::path::Path;
//!
//! let model = ObjLoader::new().load_from_file(Path::new("assets/cube.obj"))?;
//!
//! for mesh in &model.meshes {
//!     let material = model.material_for(mesh);
//!     println!("{}: {} 个三角形, 材质 {:?}", mesh.name, mesh.triangle_count(),
//!         material.map(|m| &m.name));
//! }
//! # Ok::<(), meshview::core::ImportError>(())
//! ```

pub mod core;
pub mod geometry;
pub mod math;
