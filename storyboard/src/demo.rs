//! Canned generation output used when the server runs in demo mode.
//!
//! The document holds both variants joined by the version separator: a
//! 15-second social hook cut (7 shots) and a 60-second brand story (11 shots).

/// A complete two-variant plan, as a live model would return it.
pub const DEMO_GENERATED_CONTENT: &str = r##"
# 一页速览
- **一句话定位**：废弃贝壳的赛博朋克新生
- **受众/平台**：抖音/小红书，Z世代国潮爱好者
- **核心卖点**：0成本原料变身千元潮品
- **片长结构**：15秒 | 强反差卡点剪辑
- **关键镜头**：贝壳山崩塌、激光雕刻特写、AR虚拟试戴
- **交付物**：分镜脚本

# 完整策划草案
## 1 主题定位
“垃圾堆里的艺术革命”，通过极速视觉反差，展示贝壳从废料到非遗潮品的蜕变。

## 2 受众与平台
抖音、快手短视频平台，针对关注环保、国潮、黑科技的年轻群体。

## 3 核心卖点
- 废料变宝藏（极致反差）
- 95%回收率（硬核数据）
- AR试戴（科技体验）

## 4 叙事结构
[痛点] 满地贝壳垃圾 -> [方案] 智能重塑过程 -> [价值] 绝美成品展示

## 5 视觉与声音风格
赛博朋克霓虹色调 + 快节奏电子鼓点（Cyberpunk/Glitch Art）。

## 6 关键场景与镜头亮点
特写贝壳破碎的瞬间，衔接激光雕刻的火花，最后定格在模特佩戴的炫酷画面。

# 分镜脚本（镜号表）
| 镜号 | 画面/景别/运动 | 声音/台词 | 字幕/图形 | 道具/素材 | 目的 |
| :--- | :--- | :--- | :--- | :--- | :--- |
| 1 | [特写/快切] 堆积如山的废弃鲍鱼壳，灰暗压抑，镜头急速推近 | 沉重低音轰鸣 | 字幕：垃圾？ | 废弃贝壳堆 | 痛点：展示环境压力 |
| 2 | [全景/延时] 智能回收车驶入，机械臂快速抓取，画面闪烁故障风 | 电子故障音效 (Glitch) | 字幕：资源！ | 智能回收车 | 方案：智能化介入 |
| 3 | [微距/慢放] 清洗后的贝壳在传输带上闪着珍珠光泽，激光束瞬间雕刻出纹路 | 激光烧蚀声 + 节奏鼓点起 | 字幕：重塑 | 自动化流水线 | 方案：智造工艺 |
| 4 | [中景/环绕] 3D打印机喷头在贝壳表面堆叠材料，生成复杂几何结构 | 科技感合成音 | 数据：效率+300% | 3D打印机 | 方案：技术赋能 |
| 5 | [特写/定格] 模特佩戴贝雕耳机壳，手指划过，AR界面浮现参数 | 清脆的提示音 | 字幕：AR试戴 | 成品、AR特效 | 价值：产品体验 |
| 6 | [近景/跟随] 手机屏幕中，用户通过APP扫描贝壳，虚拟生成定制饰品 | 节奏加快 | 字幕：你的专属 | 手机APP界面 | 价值：交互创新 |
| 7 | [全景/推拉] 镜头拉开，无数贝壳汇聚成“鲍罗万象”Logo，霓虹光效炸裂 | 重音收尾 | Logo：鲍罗万象 | 粒子特效 | 品牌：强化记忆 |

# 拍摄与后期要点
- **灯光/色调**：高饱和度，蓝紫撞色，强调科技感。
- **转场/节奏**：每一帧都踩在鼓点上，使用变焦转场（Zoom In/Out）。
- **音乐情绪**：强劲的工业电子乐，带有金属质感。

# 合规与风险自检
- [x] 不涉敏感政治与宗教话题
- [x] 数据口径需与最终实验报告一致
- [x] 非遗IP授权需确认
- [x] 避免广告法违禁词

# 待确认项
- 需确认AR试戴APP的录屏素材是否就位。
- 确认背景音乐版权购买情况。

===VERSION_SPLIT===

# 一页速览
- **一句话定位**：从海边废墟到国潮殿堂的温情科技叙事
- **受众/平台**：B站/企业官网/展厅，政府领导、投资人、合作伙伴
- **核心卖点**：全产业链闭环 + 非遗文化传承 + 乡村振兴价值
- **片长结构**：60秒 | 情感引入 -> 技术拆解 -> 价值升华
- **关键镜头**：老工匠的手与机械臂同框、村民笑脸、数字大屏数据跳动
- **交付物**：完整品牌故事片脚本

# 完整策划草案
## 1 主题定位
“不仅是再生，更是新生”。讲述科技如何不仅解决了污染，更让传统非遗技艺在数字时代找到新的生存土壤。

## 2 受众与平台
大赛评委、政府视察领导、产业投资人。投放于路演现场及展厅大屏。

## 3 核心卖点（含数据口径）
- **智能回收网络**：覆盖20+上下游企业。
- **数字智造中台**：生产效率提升300%。
- **95%回收率**：解决环保痛点。
- **非遗活化**：让贝雕技艺走进日常生活。

## 4 叙事结构
[痛点] 曾经的污染之痛 -> [方案] 鲍罗万象的数字化解法 -> [价值] 生态与文化的双重丰收

## 5 视觉与声音风格
前段写实纪录片质感（冷色调），中段高精科技感（蓝白色调），后段温暖人文感（暖色调）。配乐由大提琴独奏过渡到宏大交响乐。

## 6 关键场景与镜头亮点
老手艺人抚摸贝壳的特写与自动化机械臂雕刻的画面通过叠化剪辑在一起，象征传承与创新的融合。

# 分镜脚本（镜号表）
| 镜号 | 画面/景别/运动 | 声音/台词 | 字幕/图形 | 道具/素材 | 目的 |
| :--- | :--- | :--- | :--- | :--- | :--- |
| 1 | [远景/固定] 阴雨天的海边渔村，成吨的废弃贝壳堆积如山，甚至阻塞了道路 | 海浪声夹杂着嘈杂风声，沉闷钢琴 | 字幕：曾经，这是负担 | 渔村实景 | 痛点：环境污染 |
| 2 | [中景/摇摄] 渔民老张看着废料堆叹气，拿起一枚贝壳无奈摇头的背影 | 旁白：千万吨废弃贝壳，是生态的伤痕，还是错放的宝藏？ | 无 | 渔民演员 | 痛点：产业困境 |
| 3 | [特写/跟拍] 一只年轻的手捡起贝壳，镜头上摇，是“鲍罗万象”团队坚定的眼神 | 音乐转折，加入弦乐律动 | 字幕：鲍罗万象 | 团队成员 | 转折：团队入场 |
| 4 | [全景/航拍] 智能回收车穿梭在村落，构建出的数字化网络线条覆盖地图 | 旁白：我们构建智能回收网络，让每一枚贝壳都有迹可循。 | 图形：回收点位图 | 动态地图特效 | 方案：回收体系 |
| 5 | [中景/平移] 工厂内部，自动化清洗线高速运转，污水经过处理变清澈 | 机械运转声，轻快节奏 | 字幕：95% 回收利用率 | 污水处理设备 | 方案：绿色生产 |
| 6 | [微距/特写] 激光探头扫描贝壳曲面，生成三维点云模型，数据在屏幕飞速跳动 | 科技感扫描音效 | 图形：3D模型构建中 | 电脑屏幕 | 方案：数字智造 |
| 7 | [特写/对比] 左边是老艺人手握刻刀精雕细琢，右边是机械臂精准复刻纹理，分屏显示 | 旁白：数字智造中台，让非遗技艺不再难以复制。 | 字幕：效率提升300% | 刻刀、机械臂 | 方案：非遗赋能 |
| 8 | [近景/展示] 精美的贝雕手机壳、饰品、灯具在展厅灯光下流光溢彩 | 音乐进入高潮，宏大交响 | 字幕：万物皆可“鲍” | 各类成品 | 价值：产品落地 |
| 9 | [中景/抓拍] 渔民老张收到分红，笑得合不拢嘴；年轻设计师在电脑前自信讲解 | 欢笑声，快门声 | 字幕：生态致富 | 现金、设计稿 | 价值：社会效益 |
| 10 | [特写/AR演示] 用户戴着智能眼镜，看到贝雕饰品不仅是实物，还有虚拟特效环绕 | 旁白：开放生态，链接未来。 | 图形：AR界面 | 智能眼镜 | 价值：未来展望 |
| 11 | [全景/升格] 团队在海边奔跑，阳光洒在干净的沙滩上，天空中浮现项目Logo | 旁白：鲍罗万象，让废料变宝藏，让非遗见未来。 | Logo：鲍罗万象 | 海滩空镜 | 结尾：愿景升华 |

# 拍摄与后期要点
- **灯光/色调**：从开头的低饱和度冷灰，过渡到中间的科技蓝，最后是温暖的夕阳金。
- **转场/节奏**：前半段舒缓沉重，中段快速利落，后段大气磅礴。
- **音乐情绪**：层层递进，注重情感共鸣。

# 合规与风险自检
- [x] 确保村民肖像权已获授权
- [x] 工厂拍摄需佩戴安全帽，符合安全生产规范
- [x] 数据引用需标注来源（2023年度运营报表）
- [x] 避免过度承诺收益

# 待确认项
- 需协调老手艺人的拍摄档期。
- 确认展厅大屏的最终分辨率以匹配视频输出。
"##;
